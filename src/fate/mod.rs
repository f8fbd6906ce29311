//! Fate-resolution service: fate cards, suits, keywords and resonance

pub mod card;
pub mod deck;
pub mod keyword;
pub mod resolution;
pub mod resonance;

pub use card::{FateCard, FateKeyword, FateSuit};
pub use deck::{FateDeck, FateDeckState};
pub use keyword::{suit_matches, KeywordEffect, KeywordSpecial, ResolutionContext};
pub use resolution::{resolve, FateResolution};
pub use resonance::{Resonance, ResonanceRule, ResonanceZone};
