//! Combat-scoped resonance between Nav and Prav

use serde::{Deserialize, Serialize};

use crate::combat::constants::{RESONANCE_DEEP_THRESHOLD, RESONANCE_LIMIT, RESONANCE_NEAR_THRESHOLD};

/// Band of the resonance scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResonanceZone {
    DeepNav,
    Nav,
    Yav,
    Prav,
    DeepPrav,
}

impl ResonanceZone {
    pub fn from_value(value: f32) -> Self {
        if value < -RESONANCE_DEEP_THRESHOLD {
            ResonanceZone::DeepNav
        } else if value < -RESONANCE_NEAR_THRESHOLD {
            ResonanceZone::Nav
        } else if value <= RESONANCE_NEAR_THRESHOLD {
            ResonanceZone::Yav
        } else if value <= RESONANCE_DEEP_THRESHOLD {
            ResonanceZone::Prav
        } else {
            ResonanceZone::DeepPrav
        }
    }
}

/// Per-zone adjustment a fate card applies to its base value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResonanceRule {
    pub zone: ResonanceZone,
    pub modify_value: i32,
}

/// Resonance resource, clamped to `[-RESONANCE_LIMIT, RESONANCE_LIMIT]`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Resonance {
    pub value: f32,
}

impl Resonance {
    pub fn new(value: f32) -> Self {
        Self {
            value: value.clamp(-RESONANCE_LIMIT, RESONANCE_LIMIT),
        }
    }

    /// Apply a one-shot shift; returns the change actually applied
    pub fn shift(&mut self, delta: f32) -> f32 {
        let before = self.value;
        self.value = (self.value + delta).clamp(-RESONANCE_LIMIT, RESONANCE_LIMIT);
        self.value - before
    }

    pub fn zone(&self) -> ResonanceZone {
        ResonanceZone::from_value(self.value)
    }
}
