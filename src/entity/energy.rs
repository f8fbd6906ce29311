//! Player energy

use serde::{Deserialize, Serialize};

/// Energy spent to play cards, restored to the cap every player turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Energy {
    pub current: u32,
    pub per_turn: u32,
}

impl Energy {
    pub fn new(per_turn: u32) -> Self {
        Self {
            current: per_turn,
            per_turn,
        }
    }

    /// Spend `cost` if affordable; returns false and leaves energy untouched otherwise
    pub fn spend(&mut self, cost: u32) -> bool {
        if cost > self.current {
            return false;
        }
        self.current -= cost;
        true
    }

    pub fn restore(&mut self) {
        self.current = self.per_turn;
    }
}
