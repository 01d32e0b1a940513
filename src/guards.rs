//! Pure checks that pass their input through on success.
//!
//! Handlers chain these with `?` in a fixed order: existence first, then
//! ownership, then capacity or membership. A missing resource therefore
//! always reports `NotFound`, whoever asks.

use thiserror::Error;
use uuid::Uuid;

use crate::database::models::{Owned, Team};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("forbidden")]
    Forbidden,

    #[error("team is full")]
    TeamFull { capacity: usize },

    #[error("pokemon does not match team")]
    TeamMismatch,
}

pub fn require_found<T>(entity: Option<T>, kind: &'static str) -> Result<T, GuardError> {
    entity.ok_or(GuardError::NotFound(kind))
}

pub fn require_ownership<T: Owned>(principal: Uuid, entity: T) -> Result<T, GuardError> {
    if entity.owner() != principal {
        return Err(GuardError::Forbidden);
    }
    Ok(entity)
}

pub fn require_team_slot(team: Team, capacity: usize) -> Result<Team, GuardError> {
    if team.pokemons.len() >= capacity {
        return Err(GuardError::TeamFull { capacity });
    }
    Ok(team)
}

/// Position of `pokemon_id` within the team's embedded sequence
pub fn require_membership(team: &Team, pokemon_id: Uuid) -> Result<usize, GuardError> {
    team.position_of(pokemon_id).ok_or(GuardError::TeamMismatch)
}
