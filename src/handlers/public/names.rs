use axum::extract::Query;
use serde::Deserialize;

use crate::api::NamesEnvelope;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::search_species;

#[derive(Debug, Deserialize)]
pub struct NamesQuery {
    /// Substring to look for; omitted means every name
    pub search: Option<String>,
}

/// GET /names?search=<text> - title-cased species names containing `search`
pub async fn names(Query(query): Query<NamesQuery>) -> ApiResult<NamesEnvelope> {
    let names = search_species(query.search.as_deref().unwrap_or_default());
    Ok(ApiResponse::success(NamesEnvelope { names }))
}
