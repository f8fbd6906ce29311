pub mod config;
pub mod error;
pub mod rng;
pub mod types;

pub use config::CombatConfig;
pub use error::{CombatError, Result};
pub use rng::{seeded_rng, CombatRng};
pub use types::{EntityId, Round};
