//! Static combat stats for players and enemies

use serde::{Deserialize, Serialize};

use crate::entity::intent::Intent;

/// Which side an entity fights on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticipantRole {
    Player,
    Enemy,
}

/// Combat participant tag with static stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatParticipant {
    pub role: ParticipantRole,
    pub name: String,
    /// Strength for the player, power for enemies
    pub strength: i32,
    pub defense: i32,
    /// Scripted intents, cycled by round. Empty means random intents.
    pub intent_pattern: Vec<Intent>,
    pub faith_reward: i32,
    pub loot_card_ids: Vec<String>,
}

impl CombatParticipant {
    pub fn player(name: impl Into<String>, strength: i32) -> Self {
        Self {
            role: ParticipantRole::Player,
            name: name.into(),
            strength,
            defense: 0,
            intent_pattern: Vec::new(),
            faith_reward: 0,
            loot_card_ids: Vec::new(),
        }
    }

    pub fn enemy(name: impl Into<String>, power: i32, defense: i32) -> Self {
        Self {
            role: ParticipantRole::Enemy,
            name: name.into(),
            strength: power,
            defense,
            intent_pattern: Vec::new(),
            faith_reward: 0,
            loot_card_ids: Vec::new(),
        }
    }

    pub fn is_player(&self) -> bool {
        self.role == ParticipantRole::Player
    }

    pub fn is_enemy(&self) -> bool {
        self.role == ParticipantRole::Enemy
    }
}
