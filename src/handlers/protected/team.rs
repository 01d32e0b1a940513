use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};
use serde_json::Value;

use crate::api::{TeamEnvelope, TeamsEnvelope};
use crate::app::AppState;
use crate::database::models::{NewTeam, TeamPatch};
use crate::guards::{require_found, require_ownership};
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

use super::utils::{parse_id, require_valid, take_envelope, take_patch};

/// GET /teams - teams owned by the caller
pub async fn list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<TeamsEnvelope> {
    let teams = state.store.find_teams_by_owner(auth.user_id).await?;
    Ok(ApiResponse::success(TeamsEnvelope { teams }))
}

/// GET /teams/:id
pub async fn show(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<TeamEnvelope> {
    let id = parse_id("id", &id)?;

    let team = require_found(state.store.find_team(id).await?, "team")?;
    let team = require_ownership(auth.user_id, team)?;

    Ok(ApiResponse::success(TeamEnvelope { team }))
}

/// POST /teams
pub async fn create(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<TeamEnvelope> {
    let Json(body) = body?;
    let new: NewTeam = take_envelope(body, "team")?;
    require_valid(new.field_errors())?;

    let team = state.store.create_team(new, auth.user_id).await?;

    tracing::info!("Team {} created by {}", team.id, auth.user_id);
    Ok(ApiResponse::created(TeamEnvelope { team }))
}

/// PATCH /teams/:id
pub async fn update(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<()> {
    let id = parse_id("id", &id)?;

    let team = require_found(state.store.find_team(id).await?, "team")?;
    let mut team = require_ownership(auth.user_id, team)?;

    let Json(body) = body?;
    let patch: TeamPatch = take_patch(body, "team")?;

    team.apply(patch);
    state.store.save_team(&team).await?;

    Ok(ApiResponse::no_content())
}

/// DELETE /teams/:id - also deletes the standalone record of every member
pub async fn delete(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let id = parse_id("id", &id)?;

    let team = require_found(state.store.find_team(id).await?, "team")?;
    let team = require_ownership(auth.user_id, team)?;

    for pokemon in &team.pokemons {
        state.store.delete_pokemon(pokemon.id).await?;
    }
    state.store.delete_team(team.id).await?;

    tracing::info!(
        "Team {} deleted with {} pokemon by {}",
        team.id,
        team.pokemons.len(),
        auth.user_id
    );
    Ok(ApiResponse::no_content())
}
