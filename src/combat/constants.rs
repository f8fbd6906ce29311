//! Combat rule constants
//!
//! These are part of the outcome contract with the surrounding game and are
//! not tunable per encounter.

// Diplomacy
/// Bonus granted when the conflict switches track (surprise or rage shield)
pub const TRACK_SWITCH_BONUS: i32 = 3;

// Outcome consequences
pub const PACIFIED_RESONANCE_DELTA: f32 = 5.0;
pub const KILLED_RESONANCE_DELTA: f32 = -5.0;

// Resonance scale
pub const RESONANCE_LIMIT: f32 = 100.0;
pub const RESONANCE_NEAR_THRESHOLD: f32 = 20.0;
pub const RESONANCE_DEEP_THRESHOLD: f32 = 60.0;

/// Duration of the shield granted by a fortifying defense draw
pub const FORTIFY_DURATION: u32 = 1;
