use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{check_moves, check_text, FieldErrors, Owned};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Pokemon {
    pub id: Uuid,
    pub nickname: String,
    pub species: String,
    pub ability: String,
    pub moves: Vec<String>,
    pub owner: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Owned for Pokemon {
    fn owner(&self) -> Uuid {
        self.owner
    }
}

impl Pokemon {
    /// Merge a partial update into this pokemon. The owner is not part of
    /// `PokemonPatch` and so can never change here.
    pub fn apply(&mut self, patch: PokemonPatch) {
        if let Some(nickname) = patch.nickname {
            self.nickname = nickname;
        }
        if let Some(species) = patch.species {
            self.species = species;
        }
        if let Some(ability) = patch.ability {
            self.ability = ability;
        }
        if let Some(moves) = patch.moves {
            self.moves = moves;
        }
    }
}

/// Client-supplied fields for a new pokemon
#[derive(Debug, Clone, Deserialize)]
pub struct NewPokemon {
    pub nickname: String,
    pub species: String,
    pub ability: String,
    pub moves: Vec<String>,
}

impl NewPokemon {
    pub fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_text(&mut errors, "nickname", &self.nickname);
        check_text(&mut errors, "species", &self.species);
        check_text(&mut errors, "ability", &self.ability);
        check_moves(&mut errors, &self.moves);
        errors
    }
}

/// Partial update; blank fields have already been stripped by the handler
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PokemonPatch {
    pub nickname: Option<String>,
    pub species: Option<String>,
    pub ability: Option<String>,
    pub moves: Option<Vec<String>>,
}

impl PokemonPatch {
    pub fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if let Some(moves) = &self.moves {
            check_moves(&mut errors, moves);
        }
        errors
    }
}
