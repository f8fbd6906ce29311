//! Card value objects consumed by the combat core

use serde::{Deserialize, Serialize};

use crate::entity::status::StatusKind;

/// Damage channel of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    /// Health, through shields, boosted by strength
    Physical,
    /// Will when the target has any left, otherwise Health
    Mental,
}

/// Direction of a resonance shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalancePole {
    /// Toward Prav (positive resonance)
    Light,
    /// Toward Nav (negative resonance)
    Dark,
}

impl BalancePole {
    /// Signed resonance change for a shift of `amount` toward this pole
    pub fn signed(&self, amount: i32) -> f32 {
        match self {
            BalancePole::Light => amount as f32,
            BalancePole::Dark => -(amount as f32),
        }
    }
}

/// One effect a card applies when played
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CardAbility {
    Damage { amount: i32, damage_type: DamageType },
    Heal { amount: i32 },
    DrawCards { count: usize },
    TemporaryStat { stat: StatusKind, amount: i32, duration: u32 },
    ShiftBalance { pole: BalancePole, amount: i32 },
}

fn default_cost() -> u32 {
    1
}

/// A playable card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_cost")]
    pub cost: u32,
    #[serde(default)]
    pub abilities: Vec<CardAbility>,
    /// Removed from circulation after play instead of being discarded
    #[serde(default)]
    pub exhaust: bool,
    /// Plain physical damage used only when no abilities are declared
    #[serde(default)]
    pub power: Option<i32>,
}

impl Card {
    pub fn new(id: impl Into<String>, cost: u32) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            cost,
            abilities: Vec::new(),
            exhaust: false,
            power: None,
        }
    }

    pub fn with_ability(mut self, ability: CardAbility) -> Self {
        self.abilities.push(ability);
        self
    }

    pub fn with_power(mut self, power: i32) -> Self {
        self.power = Some(power);
        self
    }

    pub fn exhausting(mut self) -> Self {
        self.exhaust = true;
        self
    }

    /// Declared abilities, or the bare `power` as physical damage
    pub fn effective_abilities(&self) -> Vec<CardAbility> {
        if !self.abilities.is_empty() {
            return self.abilities.clone();
        }
        match self.power {
            Some(amount) => vec![CardAbility::Damage {
                amount,
                damage_type: DamageType::Physical,
            }],
            None => Vec::new(),
        }
    }
}
