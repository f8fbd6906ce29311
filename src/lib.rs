//! Fate Combat - deterministic card-driven combat for a narrative RPG
//!
//! A combat is built from an `EncounterDefinition` and driven through
//! `combat::Combat`. All variance comes from fate cards drawn on one seeded
//! generator, so the same seed and action sequence always replay exactly.

pub mod cards;
pub mod combat;
pub mod content;
pub mod core;
pub mod ecs;
pub mod entity;
pub mod fate;

pub use crate::combat::{Combat, CombatEvent, CombatOutcome, CombatPhase, CombatResult, VictoryKind};
pub use crate::content::{load_encounter, EncounterDefinition, EnemyDefinition, PlayerDefinition};
pub use crate::core::{CombatConfig, CombatError, Result};
