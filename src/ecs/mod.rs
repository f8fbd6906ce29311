pub mod world;

pub use world::{CombatWorld, ComponentStore};
