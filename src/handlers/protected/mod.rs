// handlers/protected/mod.rs - Handlers behind the bearer-token layer
//
// Every handler here receives the authenticated `AuthUser` as a request
// extension and runs a fixed pipeline: lookup, not-found guard, ownership
// guard, then (where relevant) capacity or membership. Only then is the
// request body parsed and validated, followed by the store mutation and
// the dual-write of the team's embedded copy.

pub mod pokemon;
pub mod team;
pub mod team_pokemon;
pub mod utils;
