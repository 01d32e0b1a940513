use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};
use serde_json::Value;

use crate::api::PokemonEnvelope;
use crate::app::AppState;
use crate::database::models::PokemonPatch;
use crate::guards::{require_found, require_ownership};
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::{remove_embedded_copy, sync_embedded_copy};

use super::utils::{parse_id, require_valid, take_patch};

/// GET /pokemons/:id
pub async fn show(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<PokemonEnvelope> {
    let id = parse_id("id", &id)?;

    let pokemon = require_found(state.store.find_pokemon(id).await?, "pokemon")?;
    let pokemon = require_ownership(auth.user_id, pokemon)?;

    Ok(ApiResponse::success(PokemonEnvelope { pokemon }))
}

/// PATCH /pokemons/:id
pub async fn update(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<()> {
    let id = parse_id("id", &id)?;

    let pokemon = require_found(state.store.find_pokemon(id).await?, "pokemon")?;
    let mut pokemon = require_ownership(auth.user_id, pokemon)?;

    let Json(body) = body?;
    let patch: PokemonPatch = take_patch(body, "pokemon")?;
    require_valid(patch.field_errors())?;

    pokemon.apply(patch);
    let saved = state.store.save_pokemon(&pokemon).await?;
    sync_embedded_copy(state.store.as_ref(), &saved).await?;

    tracing::info!("Pokemon {} updated by {}", saved.id, auth.user_id);
    Ok(ApiResponse::no_content())
}

/// DELETE /pokemons/:id
pub async fn delete(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let id = parse_id("id", &id)?;

    let pokemon = require_found(state.store.find_pokemon(id).await?, "pokemon")?;
    let pokemon = require_ownership(auth.user_id, pokemon)?;

    state.store.delete_pokemon(pokemon.id).await?;
    remove_embedded_copy(state.store.as_ref(), pokemon.id).await?;

    tracing::info!("Pokemon {} deleted by {}", pokemon.id, auth.user_id);
    Ok(ApiResponse::no_content())
}
