//! Combat state component
//!
//! One per combat: phase, round counter and the one-shot flags.

use serde::{Deserialize, Serialize};

use crate::core::types::Round;

/// Combat phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CombatPhase {
    #[default]
    Setup,
    PlayerTurn,
    EnemyResolve,
    Victory,
    Defeat,
}

impl CombatPhase {
    /// Victory and Defeat lock the combat
    pub fn is_terminal(&self) -> bool {
        matches!(self, CombatPhase::Victory | CombatPhase::Defeat)
    }
}

/// Combat state component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatState {
    pub phase: CombatPhase,
    /// Starts at 1, only ever increases
    pub round: Round,
    pub is_active: bool,
    pub mulligan_done: bool,
}

impl Default for CombatState {
    fn default() -> Self {
        Self {
            phase: CombatPhase::Setup,
            round: 1,
            is_active: false,
            mulligan_done: false,
        }
    }
}

impl CombatState {
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn advance_round(&mut self) -> Round {
        self.round += 1;
        self.round
    }
}
