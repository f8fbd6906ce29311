//! Force vs influence tracks

use serde::{Deserialize, Serialize};

/// Which track the conflict is currently resolved on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiplomacyTrack {
    #[default]
    Physical,
    Spiritual,
}

/// Diplomacy component
///
/// Only attached when the encounter has a Will-bearing enemy. Both bonuses
/// decay by one per round and never go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Diplomacy {
    pub track: DiplomacyTrack,
    /// Added to influence totals after switching to the spiritual track
    pub surprise_bonus: i32,
    /// Added to enemy defense after switching back to the physical track
    pub rage_shield: i32,
}

impl Diplomacy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to `track`, granting the matching bonus when it is a switch
    ///
    /// Returns true if the track changed.
    pub fn switch_to(&mut self, track: DiplomacyTrack, bonus: i32) -> bool {
        if self.track == track {
            return false;
        }
        self.track = track;
        match track {
            DiplomacyTrack::Spiritual => self.surprise_bonus = bonus,
            DiplomacyTrack::Physical => self.rage_shield = bonus,
        }
        true
    }

    pub fn decay(&mut self) {
        self.surprise_bonus = (self.surprise_bonus - 1).max(0);
        self.rage_shield = (self.rage_shield - 1).max(0);
    }
}
