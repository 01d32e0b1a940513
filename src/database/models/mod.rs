pub mod pokemon;
pub mod team;

use uuid::Uuid;

pub use pokemon::{NewPokemon, Pokemon, PokemonPatch};
pub use team::{NewTeam, Team, TeamPatch, TeamRow};

/// Entities carrying an owner reference
pub trait Owned {
    fn owner(&self) -> Uuid;
}

/// Field name to message, rendered as `field_errors` in validation responses
pub type FieldErrors = std::collections::HashMap<String, String>;

fn check_text(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field.to_string(), "This field is required".to_string());
    }
}

fn check_moves(errors: &mut FieldErrors, moves: &[String]) {
    if moves.iter().any(|m| m.trim().is_empty()) {
        errors.insert("moves".to_string(), "Moves cannot be blank".to_string());
    }
}
