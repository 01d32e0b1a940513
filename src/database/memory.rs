use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::manager::DatabaseError;
use super::models::{NewPokemon, NewTeam, Pokemon, Team};
use super::store::EntityStore;

/// In-process entity store, used by `serve --memory` and the test suite
#[derive(Default)]
pub struct MemoryStore {
    pokemons: RwLock<HashMap<Uuid, Pokemon>>,
    teams: RwLock<HashMap<Uuid, Team>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn find_pokemon(&self, id: Uuid) -> Result<Option<Pokemon>, DatabaseError> {
        Ok(self.pokemons.read().await.get(&id).cloned())
    }

    async fn create_pokemon(&self, new: NewPokemon, owner: Uuid) -> Result<Pokemon, DatabaseError> {
        let now = Utc::now();
        let pokemon = Pokemon {
            id: Uuid::new_v4(),
            nickname: new.nickname,
            species: new.species,
            ability: new.ability,
            moves: new.moves,
            owner,
            created_at: now,
            updated_at: now,
        };
        self.pokemons.write().await.insert(pokemon.id, pokemon.clone());
        Ok(pokemon)
    }

    async fn save_pokemon(&self, pokemon: &Pokemon) -> Result<Pokemon, DatabaseError> {
        let mut pokemons = self.pokemons.write().await;
        let stored = pokemons
            .get_mut(&pokemon.id)
            .ok_or_else(|| DatabaseError::NotFound(format!("pokemon {}", pokemon.id)))?;

        stored.nickname = pokemon.nickname.clone();
        stored.species = pokemon.species.clone();
        stored.ability = pokemon.ability.clone();
        stored.moves = pokemon.moves.clone();
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn delete_pokemon(&self, id: Uuid) -> Result<bool, DatabaseError> {
        Ok(self.pokemons.write().await.remove(&id).is_some())
    }

    async fn find_team(&self, id: Uuid) -> Result<Option<Team>, DatabaseError> {
        Ok(self.teams.read().await.get(&id).cloned())
    }

    async fn find_teams_by_owner(&self, owner: Uuid) -> Result<Vec<Team>, DatabaseError> {
        let mut teams: Vec<Team> = self
            .teams
            .read()
            .await
            .values()
            .filter(|t| t.owner == owner)
            .cloned()
            .collect();
        teams.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(teams)
    }

    async fn find_team_containing(&self, pokemon_id: Uuid) -> Result<Option<Team>, DatabaseError> {
        Ok(self
            .teams
            .read()
            .await
            .values()
            .find(|t| t.position_of(pokemon_id).is_some())
            .cloned())
    }

    async fn create_team(&self, new: NewTeam, owner: Uuid) -> Result<Team, DatabaseError> {
        let now = Utc::now();
        let team = Team {
            id: Uuid::new_v4(),
            title: new.title,
            pokemons: Vec::new(),
            owner,
            created_at: now,
            updated_at: now,
        };
        self.teams.write().await.insert(team.id, team.clone());
        Ok(team)
    }

    async fn save_team(&self, team: &Team) -> Result<Team, DatabaseError> {
        let mut teams = self.teams.write().await;
        let stored = teams
            .get_mut(&team.id)
            .ok_or_else(|| DatabaseError::NotFound(format!("team {}", team.id)))?;

        stored.title = team.title.clone();
        stored.pokemons = team.pokemons.clone();
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn delete_team(&self, id: Uuid) -> Result<bool, DatabaseError> {
        Ok(self.teams.write().await.remove(&id).is_some())
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}
