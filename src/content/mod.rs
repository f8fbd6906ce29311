//! Encounter content: definitions and TOML loading

pub mod definition;
pub mod loader;

pub use definition::{EncounterDefinition, EnemyDefinition, PlayerDefinition};
pub use loader::{load_encounter, LoadError};
