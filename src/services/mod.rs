pub mod roster;
pub mod species;

pub use roster::{remove_embedded_copy, sync_embedded_copy};
pub use species::search_species;
