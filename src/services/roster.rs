//! Dual-write helpers keeping a team's embedded pokemon in step with the
//! standalone records. Each helper issues independent store calls; a
//! failure between them leaves the two copies diverged.

use uuid::Uuid;

use crate::database::models::Pokemon;
use crate::database::{DatabaseError, EntityStore};

/// Replace the embedded copy of `pokemon` in whichever team holds it
pub async fn sync_embedded_copy(
    store: &dyn EntityStore,
    pokemon: &Pokemon,
) -> Result<(), DatabaseError> {
    let Some(mut team) = store.find_team_containing(pokemon.id).await? else {
        return Ok(());
    };
    if let Some(index) = team.position_of(pokemon.id) {
        team.pokemons[index] = pokemon.clone();
        store.save_team(&team).await?;
        tracing::debug!("Synced embedded copy of pokemon {} in team {}", pokemon.id, team.id);
    }
    Ok(())
}

/// Remove the embedded copy of `pokemon_id` from whichever team holds it
pub async fn remove_embedded_copy(
    store: &dyn EntityStore,
    pokemon_id: Uuid,
) -> Result<(), DatabaseError> {
    let Some(mut team) = store.find_team_containing(pokemon_id).await? else {
        return Ok(());
    };
    team.pokemons.retain(|p| p.id != pokemon_id);
    store.save_team(&team).await?;
    tracing::debug!("Removed embedded copy of pokemon {} from team {}", pokemon_id, team.id);
    Ok(())
}
