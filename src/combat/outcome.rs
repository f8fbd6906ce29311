//! Terminal outcomes and the result handed back to the game

use serde::{Deserialize, Serialize};

use crate::combat::constants::{KILLED_RESONANCE_DELTA, PACIFIED_RESONANCE_DELTA};
use crate::core::types::Round;
use crate::fate::FateDeckState;

/// How a victory was won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VictoryKind {
    /// An enemy's health reached zero
    Killed,
    /// Every enemy was talked down through Will
    Pacified,
}

/// Terminal combat outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatOutcome {
    Victory(VictoryKind),
    Defeat,
}

impl CombatOutcome {
    pub fn is_victory(&self) -> bool {
        matches!(self, CombatOutcome::Victory(_))
    }

    /// Fixed resonance consequence of the outcome
    pub fn resonance_delta(&self) -> f32 {
        match self {
            CombatOutcome::Victory(VictoryKind::Killed) => KILLED_RESONANCE_DELTA,
            CombatOutcome::Victory(VictoryKind::Pacified) => PACIFIED_RESONANCE_DELTA,
            CombatOutcome::Defeat => 0.0,
        }
    }
}

/// Consequence summary computed once when the combat ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatResult {
    pub outcome: CombatOutcome,
    pub resonance_delta: f32,
    pub faith_delta: i32,
    pub loot_card_ids: Vec<String>,
    pub fate_deck_state: FateDeckState,
    pub player_health: i32,
    pub rounds: Round,
    /// Combat-scoped resonance at the end, after card shifts and rituals
    pub final_resonance: f32,
}
