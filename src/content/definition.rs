//! Encounter definitions
//!
//! Plain serde structs describing who fights, with which cards, and under
//! which seed. A definition fully determines a combat together with the
//! sequence of player actions.

use serde::{Deserialize, Serialize};

use crate::cards::card::Card;
use crate::core::config::CombatConfig;
use crate::entity::{CombatParticipant, Health, Intent};
use crate::fate::card::FateCard;

fn default_strength() -> i32 {
    1
}

fn default_energy() -> u32 {
    3
}

/// The player side of an encounter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDefinition {
    pub name: String,
    #[serde(default = "default_strength")]
    pub strength: i32,
    pub health: i32,
    /// Energy restored at the start of each player turn
    #[serde(default = "default_energy")]
    pub energy: u32,
    #[serde(default)]
    pub deck: Vec<Card>,
}

impl PlayerDefinition {
    pub fn participant(&self) -> CombatParticipant {
        CombatParticipant::player(self.name.clone(), self.strength)
    }
}

/// One adversary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyDefinition {
    pub name: String,
    pub health: i32,
    /// Attack amount for random intents
    pub power: i32,
    #[serde(default)]
    pub defense: i32,
    /// Will pool; only Will-bearing enemies can be pacified
    #[serde(default)]
    pub will: Option<i32>,
    /// Scripted intents cycled by round; empty rolls random intents
    #[serde(default)]
    pub pattern: Vec<Intent>,
    #[serde(default)]
    pub faith_reward: i32,
    #[serde(default)]
    pub loot_card_ids: Vec<String>,
}

impl EnemyDefinition {
    pub fn participant(&self) -> CombatParticipant {
        let mut participant = CombatParticipant::enemy(self.name.clone(), self.power, self.defense);
        participant.intent_pattern = self.pattern.clone();
        participant.faith_reward = self.faith_reward;
        participant.loot_card_ids = self.loot_card_ids.clone();
        participant
    }

    pub fn health_component(&self) -> Health {
        match self.will {
            Some(will) => Health::with_will(self.health, will),
            None => Health::new(self.health),
        }
    }
}

/// Everything needed to start one combat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterDefinition {
    pub seed: u64,
    /// Starting combat resonance
    #[serde(default)]
    pub resonance: f32,
    pub player: PlayerDefinition,
    pub enemies: Vec<EnemyDefinition>,
    #[serde(default)]
    pub fate_deck: Vec<FateCard>,
    #[serde(default)]
    pub config: CombatConfig,
}

impl EncounterDefinition {
    pub fn new(seed: u64, player: PlayerDefinition, enemies: Vec<EnemyDefinition>) -> Self {
        Self {
            seed,
            resonance: 0.0,
            player,
            enemies,
            fate_deck: Vec::new(),
            config: CombatConfig::default(),
        }
    }

    pub fn with_fate_deck(mut self, fate_deck: Vec<FateCard>) -> Self {
        self.fate_deck = fate_deck;
        self
    }

    pub fn with_resonance(mut self, resonance: f32) -> Self {
        self.resonance = resonance;
        self
    }

    pub fn with_config(mut self, config: CombatConfig) -> Self {
        self.config = config;
        self
    }

    /// Whether any enemy can be talked down
    pub fn has_diplomacy(&self) -> bool {
        self.enemies.iter().any(|e| e.will.is_some())
    }
}
