use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use uuid::Uuid;

use super::{check_text, FieldErrors, Owned, Pokemon};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    pub title: String,
    /// Embedded copies of the team's pokemon, in insertion order
    pub pokemons: Vec<Pokemon>,
    pub owner: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Owned for Team {
    fn owner(&self) -> Uuid {
        self.owner
    }
}

impl Team {
    pub fn position_of(&self, pokemon_id: Uuid) -> Option<usize> {
        self.pokemons.iter().position(|p| p.id == pokemon_id)
    }

    pub fn apply(&mut self, patch: TeamPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
    }
}

/// Row shape of the `teams` table; embedded pokemon live in a JSONB column
#[derive(Debug, FromRow)]
pub struct TeamRow {
    pub id: Uuid,
    pub title: String,
    pub pokemons: Json<Vec<Pokemon>>,
    pub owner: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            pokemons: row.pokemons.0,
            owner: row.owner,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTeam {
    pub title: String,
}

impl NewTeam {
    pub fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_text(&mut errors, "title", &self.title);
        errors
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamPatch {
    pub title: Option<String>,
}
