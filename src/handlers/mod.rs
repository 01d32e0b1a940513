// handlers/mod.rs - two tiers: public (no auth) and protected (bearer JWT)

pub mod protected;
pub mod public;
