//! Combat configuration with documented tunables
//!
//! Values that shape pacing live here. Rule constants that the outcome
//! contract depends on (switch bonus, resonance deltas) are fixed in
//! `combat::constants` instead.

use serde::{Deserialize, Serialize};

use crate::core::error::CombatError;

/// Configuration for a single encounter
///
/// Every field has a default, so a TOML file only needs the values it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    // === DECK ===
    /// Cards drawn into the opening hand
    ///
    /// The opening draw merges every non-exhausted pile first, so this is
    /// also the hand size after a mulligan in round 1.
    pub opening_hand_size: usize,

    /// Cards drawn at the start of each player turn after the first
    pub cards_drawn_per_round: usize,

    // === ENEMY INTENTS ===
    /// Relative weight of an attack intent in a random roll
    pub attack_intent_weight: u32,

    /// Relative weight of a heal intent in a random roll
    ///
    /// A heal rolled by an enemy at full health becomes an attack.
    pub heal_intent_weight: u32,

    /// Relative weight of a ritual intent in a random roll
    pub ritual_intent_weight: u32,

    /// Health restored by a random heal intent
    pub enemy_heal_amount: i32,

    /// Resonance pulled toward Nav by a random ritual intent
    pub ritual_shift_amount: i32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            opening_hand_size: 5,
            cards_drawn_per_round: 1,

            // attack > heal = ritual
            attack_intent_weight: 70,
            heal_intent_weight: 15,
            ritual_intent_weight: 15,
            enemy_heal_amount: 3,
            ritual_shift_amount: 5,
        }
    }
}

impl CombatConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML, filling gaps with defaults
    pub fn from_toml_str(content: &str) -> Result<Self, CombatError> {
        let config: CombatConfig =
            toml::from_str(content).map_err(|e| CombatError::InvalidConfig(e.to_string()))?;
        config.validate().map_err(CombatError::InvalidConfig)?;
        Ok(config)
    }

    /// Sum of all intent weights
    pub fn total_intent_weight(&self) -> u32 {
        self.attack_intent_weight + self.heal_intent_weight + self.ritual_intent_weight
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.total_intent_weight() == 0 {
            return Err("At least one intent weight must be positive".into());
        }

        if self.enemy_heal_amount < 0 || self.ritual_shift_amount < 0 {
            return Err(format!(
                "Intent amounts must not be negative (heal {}, ritual {})",
                self.enemy_heal_amount, self.ritual_shift_amount
            ));
        }

        Ok(())
    }
}
