//! Components attached to combat entities

pub mod diplomacy;
pub mod energy;
pub mod health;
pub mod intent;
pub mod participant;
pub mod status;

pub use diplomacy::{Diplomacy, DiplomacyTrack};
pub use energy::Energy;
pub use health::{Health, Pool};
pub use intent::Intent;
pub use participant::{CombatParticipant, ParticipantRole};
pub use status::{StatusEffect, StatusEffects, StatusKind, StatusTick};
