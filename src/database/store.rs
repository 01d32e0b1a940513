use async_trait::async_trait;
use uuid::Uuid;

use super::manager::DatabaseError;
use super::models::{NewPokemon, NewTeam, Pokemon, Team};

/// Persistence for pokemon and teams.
///
/// Every method is a single independent write or read. Callers that touch
/// both a standalone pokemon and its embedded copy inside a team issue two
/// calls; nothing here makes that pair atomic.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn find_pokemon(&self, id: Uuid) -> Result<Option<Pokemon>, DatabaseError>;

    async fn create_pokemon(&self, new: NewPokemon, owner: Uuid) -> Result<Pokemon, DatabaseError>;

    /// Persist the mutable fields of `pokemon` and bump `updated_at`.
    /// The stored owner is never rewritten.
    async fn save_pokemon(&self, pokemon: &Pokemon) -> Result<Pokemon, DatabaseError>;

    /// Returns false when nothing was deleted
    async fn delete_pokemon(&self, id: Uuid) -> Result<bool, DatabaseError>;

    async fn find_team(&self, id: Uuid) -> Result<Option<Team>, DatabaseError>;

    async fn find_teams_by_owner(&self, owner: Uuid) -> Result<Vec<Team>, DatabaseError>;

    /// The team whose embedded sequence holds a copy of `pokemon_id`, if any
    async fn find_team_containing(&self, pokemon_id: Uuid) -> Result<Option<Team>, DatabaseError>;

    async fn create_team(&self, new: NewTeam, owner: Uuid) -> Result<Team, DatabaseError>;

    /// Persist title and embedded pokemon and bump `updated_at`
    async fn save_team(&self, team: &Team) -> Result<Team, DatabaseError>;

    async fn delete_team(&self, id: Uuid) -> Result<bool, DatabaseError>;

    async fn health_check(&self) -> Result<(), DatabaseError>;
}
