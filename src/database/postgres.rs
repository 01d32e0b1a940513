use async_trait::async_trait;
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use super::manager::DatabaseError;
use super::models::{NewPokemon, NewTeam, Pokemon, Team, TeamRow};
use super::store::EntityStore;

const POKEMON_COLUMNS: &str =
    "id, nickname, species, ability, moves, owner, created_at, updated_at";
const TEAM_COLUMNS: &str = "id, title, pokemons, owner, created_at, updated_at";

/// PostgreSQL-backed entity store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore for PgStore {
    async fn find_pokemon(&self, id: Uuid) -> Result<Option<Pokemon>, DatabaseError> {
        let sql = format!("SELECT {} FROM pokemons WHERE id = $1", POKEMON_COLUMNS);
        let pokemon = sqlx::query_as::<_, Pokemon>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(pokemon)
    }

    async fn create_pokemon(&self, new: NewPokemon, owner: Uuid) -> Result<Pokemon, DatabaseError> {
        let sql = format!(
            "INSERT INTO pokemons (id, nickname, species, ability, moves, owner) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            POKEMON_COLUMNS
        );
        let pokemon = sqlx::query_as::<_, Pokemon>(&sql)
            .bind(Uuid::new_v4())
            .bind(&new.nickname)
            .bind(&new.species)
            .bind(&new.ability)
            .bind(&new.moves)
            .bind(owner)
            .fetch_one(&self.pool)
            .await?;
        Ok(pokemon)
    }

    async fn save_pokemon(&self, pokemon: &Pokemon) -> Result<Pokemon, DatabaseError> {
        // owner is deliberately absent from the SET list
        let sql = format!(
            "UPDATE pokemons \
             SET nickname = $2, species = $3, ability = $4, moves = $5, updated_at = now() \
             WHERE id = $1 RETURNING {}",
            POKEMON_COLUMNS
        );
        sqlx::query_as::<_, Pokemon>(&sql)
            .bind(pokemon.id)
            .bind(&pokemon.nickname)
            .bind(&pokemon.species)
            .bind(&pokemon.ability)
            .bind(&pokemon.moves)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("pokemon {}", pokemon.id)))
    }

    async fn delete_pokemon(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM pokemons WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_team(&self, id: Uuid) -> Result<Option<Team>, DatabaseError> {
        let sql = format!("SELECT {} FROM teams WHERE id = $1", TEAM_COLUMNS);
        let row = sqlx::query_as::<_, TeamRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Team::from))
    }

    async fn find_teams_by_owner(&self, owner: Uuid) -> Result<Vec<Team>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM teams WHERE owner = $1 ORDER BY created_at, id",
            TEAM_COLUMNS
        );
        let rows = sqlx::query_as::<_, TeamRow>(&sql)
            .bind(owner)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Team::from).collect())
    }

    async fn find_team_containing(&self, pokemon_id: Uuid) -> Result<Option<Team>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM teams \
             WHERE pokemons @> jsonb_build_array(jsonb_build_object('id', $1::text)) LIMIT 1",
            TEAM_COLUMNS
        );
        let row = sqlx::query_as::<_, TeamRow>(&sql)
            .bind(pokemon_id.to_string())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Team::from))
    }

    async fn create_team(&self, new: NewTeam, owner: Uuid) -> Result<Team, DatabaseError> {
        let sql = format!(
            "INSERT INTO teams (id, title, pokemons, owner) VALUES ($1, $2, $3, $4) RETURNING {}",
            TEAM_COLUMNS
        );
        let row = sqlx::query_as::<_, TeamRow>(&sql)
            .bind(Uuid::new_v4())
            .bind(&new.title)
            .bind(Json(Vec::<Pokemon>::new()))
            .bind(owner)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn save_team(&self, team: &Team) -> Result<Team, DatabaseError> {
        let sql = format!(
            "UPDATE teams SET title = $2, pokemons = $3, updated_at = now() \
             WHERE id = $1 RETURNING {}",
            TEAM_COLUMNS
        );
        sqlx::query_as::<_, TeamRow>(&sql)
            .bind(team.id)
            .bind(&team.title)
            .bind(Json(&team.pokemons))
            .fetch_optional(&self.pool)
            .await?
            .map(Team::from)
            .ok_or_else(|| DatabaseError::NotFound(format!("team {}", team.id)))
    }

    async fn delete_team(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
