// handlers/public/mod.rs - Handlers that need no bearer token

pub mod names;
pub mod status;

pub use names::names;
pub use status::{health, root};
