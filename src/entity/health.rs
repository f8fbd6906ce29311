//! Health and Will pools

use serde::{Deserialize, Serialize};

/// A depletable resource clamped to `[0, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    pub current: i32,
    pub max: i32,
}

impl Pool {
    pub fn full(max: i32) -> Self {
        let max = max.max(0);
        Self { current: max, max }
    }

    pub fn is_empty(&self) -> bool {
        self.current <= 0
    }

    /// Remove up to `amount`, returning how much was actually lost
    pub fn drain(&mut self, amount: i32) -> i32 {
        let lost = amount.max(0).min(self.current);
        self.current -= lost;
        lost
    }

    /// Restore up to `amount`, returning how much was actually gained
    pub fn restore(&mut self, amount: i32) -> i32 {
        let gained = amount.max(0).min(self.max - self.current);
        self.current += gained;
        gained
    }
}

/// Health component
///
/// Will is the second pool the influence path drains. An entity without Will
/// cannot be pacified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub hp: Pool,
    pub will: Option<Pool>,
}

impl Health {
    pub fn new(max_hp: i32) -> Self {
        Self {
            hp: Pool::full(max_hp),
            will: None,
        }
    }

    pub fn with_will(max_hp: i32, max_will: i32) -> Self {
        Self {
            hp: Pool::full(max_hp),
            will: Some(Pool::full(max_will)),
        }
    }

    pub fn current(&self) -> i32 {
        self.hp.current
    }

    pub fn is_dead(&self) -> bool {
        self.hp.is_empty()
    }

    /// Whether the entity carries a Will pool at all
    pub fn is_diplomacy_capable(&self) -> bool {
        self.will.is_some()
    }

    pub fn will_current(&self) -> Option<i32> {
        self.will.map(|w| w.current)
    }

    /// Will present and above zero
    pub fn has_will(&self) -> bool {
        self.will.map_or(false, |w| !w.is_empty())
    }

    /// Will depleted while still alive
    pub fn is_pacified(&self) -> bool {
        !self.is_dead() && self.will.map_or(false, |w| w.is_empty())
    }

    /// Dead or pacified; a down entity takes no further actions
    pub fn is_down(&self) -> bool {
        self.is_dead() || self.is_pacified()
    }

    pub fn is_full(&self) -> bool {
        self.hp.current >= self.hp.max
    }

    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.hp.drain(amount)
    }

    pub fn heal(&mut self, amount: i32) -> i32 {
        self.hp.restore(amount)
    }

    /// Drain Will; returns 0 when the entity has no Will pool
    pub fn drain_will(&mut self, amount: i32) -> i32 {
        match self.will.as_mut() {
            Some(will) => will.drain(amount),
            None => 0,
        }
    }
}
