//! Pokemon routes scoped under a team. Each pipeline checks the team first
//! (existence, then ownership) and only then looks at the pokemon.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};
use serde_json::Value;

use crate::api::{PokemonEnvelope, PokemonsEnvelope};
use crate::app::AppState;
use crate::database::models::{NewPokemon, PokemonPatch};
use crate::guards::{require_found, require_membership, require_ownership, require_team_slot};
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

use super::utils::{parse_id, require_valid, take_envelope, take_patch};

/// GET /teams/:id/pokemons
pub async fn list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(team_id): Path<String>,
) -> ApiResult<PokemonsEnvelope> {
    let team_id = parse_id("id", &team_id)?;

    let team = require_found(state.store.find_team(team_id).await?, "team")?;
    let team = require_ownership(auth.user_id, team)?;

    Ok(ApiResponse::success(PokemonsEnvelope { pokemons: team.pokemons }))
}

/// POST /teams/:id/pokemons
pub async fn create(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(team_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<PokemonEnvelope> {
    let team_id = parse_id("id", &team_id)?;

    let team = require_found(state.store.find_team(team_id).await?, "team")?;
    let team = require_ownership(auth.user_id, team)?;
    let mut team = require_team_slot(team, state.team_capacity)?;

    // Any owner in the body is ignored; NewPokemon has no such field
    let Json(body) = body?;
    let new: NewPokemon = take_envelope(body, "pokemon")?;
    require_valid(new.field_errors())?;

    let pokemon = state.store.create_pokemon(new, auth.user_id).await?;
    team.pokemons.push(pokemon.clone());
    state.store.save_team(&team).await?;

    tracing::info!(
        "Pokemon {} added to team {} ({}/{})",
        pokemon.id,
        team.id,
        team.pokemons.len(),
        state.team_capacity
    );
    Ok(ApiResponse::created(PokemonEnvelope { pokemon }))
}

/// PATCH /teams/:id/pokemons/:pokemon_id
pub async fn update(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((team_id, pokemon_id)): Path<(String, String)>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<PokemonEnvelope> {
    let team_id = parse_id("id", &team_id)?;
    let pokemon_id = parse_id("pokemon_id", &pokemon_id)?;

    let team = require_found(state.store.find_team(team_id).await?, "team")?;
    let mut team = require_ownership(auth.user_id, team)?;
    let pokemon = require_found(state.store.find_pokemon(pokemon_id).await?, "pokemon")?;
    let mut pokemon = require_ownership(auth.user_id, pokemon)?;
    let index = require_membership(&team, pokemon.id)?;

    let Json(body) = body?;
    let patch: PokemonPatch = take_patch(body, "pokemon")?;
    require_valid(patch.field_errors())?;

    pokemon.apply(patch);
    let saved = state.store.save_pokemon(&pokemon).await?;
    team.pokemons[index] = saved.clone();
    state.store.save_team(&team).await?;

    Ok(ApiResponse::success(PokemonEnvelope { pokemon: saved }))
}

/// DELETE /teams/:id/pokemons/:pokemon_id
pub async fn delete(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((team_id, pokemon_id)): Path<(String, String)>,
) -> ApiResult<()> {
    let team_id = parse_id("id", &team_id)?;
    let pokemon_id = parse_id("pokemon_id", &pokemon_id)?;

    let team = require_found(state.store.find_team(team_id).await?, "team")?;
    let mut team = require_ownership(auth.user_id, team)?;
    let pokemon = require_found(state.store.find_pokemon(pokemon_id).await?, "pokemon")?;
    let pokemon = require_ownership(auth.user_id, pokemon)?;
    let index = require_membership(&team, pokemon.id)?;

    team.pokemons.remove(index);
    state.store.delete_pokemon(pokemon.id).await?;
    state.store.save_team(&team).await?;

    tracing::info!("Pokemon {} removed from team {}", pokemon.id, team.id);
    Ok(ApiResponse::no_content())
}
