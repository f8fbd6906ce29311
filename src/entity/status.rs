//! Timed status effects
//!
//! Durations count round advances. An effect whose duration reaches zero is
//! removed rather than kept at zero.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named status effect kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Absorbs incoming damage before health loss
    Shield,
    /// Direct damage once per round advance
    Poison,
    /// Added to outgoing physical damage
    Strength,
}

/// A single active effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub amount: i32,
    pub duration: u32,
}

/// What one round advance did to an entity's effects
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTick {
    pub poison_damage: i32,
    pub expired: Vec<StatusKind>,
}

/// Status effects component
///
/// Ordered map so iteration and serialization are stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffects {
    effects: BTreeMap<StatusKind, StatusEffect>,
}

impl StatusEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an effect. Re-applying stacks the amount and keeps the longer duration.
    pub fn apply(&mut self, kind: StatusKind, amount: i32, duration: u32) {
        if duration == 0 {
            return;
        }
        self.effects
            .entry(kind)
            .and_modify(|e| {
                e.amount += amount;
                e.duration = e.duration.max(duration);
            })
            .or_insert(StatusEffect { amount, duration });
    }

    pub fn get(&self, kind: StatusKind) -> Option<&StatusEffect> {
        self.effects.get(&kind)
    }

    /// Current amount of an effect, 0 when inactive
    pub fn amount(&self, kind: StatusKind) -> i32 {
        self.effects.get(&kind).map_or(0, |e| e.amount)
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StatusKind, &StatusEffect)> {
        self.effects.iter()
    }

    /// Run incoming damage through the shield
    ///
    /// Returns `(remaining, absorbed)`. A shield used up is removed.
    pub fn absorb(&mut self, damage: i32) -> (i32, i32) {
        let damage = damage.max(0);
        let Some(shield) = self.effects.get_mut(&StatusKind::Shield) else {
            return (damage, 0);
        };
        let absorbed = damage.min(shield.amount.max(0));
        shield.amount -= absorbed;
        if shield.amount <= 0 {
            self.effects.remove(&StatusKind::Shield);
        }
        (damage - absorbed, absorbed)
    }

    /// Advance one round: report poison, decrement durations, drop expired effects
    pub fn tick(&mut self) -> StatusTick {
        let poison_damage = self.amount(StatusKind::Poison).max(0);
        let mut expired = Vec::new();

        for (kind, effect) in self.effects.iter_mut() {
            effect.duration = effect.duration.saturating_sub(1);
            if effect.duration == 0 {
                expired.push(*kind);
            }
        }
        for kind in &expired {
            self.effects.remove(kind);
        }

        StatusTick {
            poison_damage,
            expired,
        }
    }
}
