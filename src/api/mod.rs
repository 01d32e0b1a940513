//! JSON envelopes keyed by singular or plural resource name

use serde::{Deserialize, Serialize};

use crate::database::models::{Pokemon, Team};

#[derive(Debug, Serialize)]
pub struct PokemonEnvelope {
    pub pokemon: Pokemon,
}

#[derive(Debug, Serialize)]
pub struct PokemonsEnvelope {
    pub pokemons: Vec<Pokemon>,
}

#[derive(Debug, Serialize)]
pub struct TeamEnvelope {
    pub team: Team,
}

#[derive(Debug, Serialize)]
pub struct TeamsEnvelope {
    pub teams: Vec<Team>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NamesEnvelope {
    pub names: Vec<String>,
}
