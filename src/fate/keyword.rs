//! Keyword and suit tables
//!
//! Every table is an exhaustive match so a new keyword or context cannot be
//! left unhandled.

use serde::{Deserialize, Serialize};

use crate::fate::card::{FateKeyword, FateSuit};

/// Which kind of action a fate draw is resolving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionContext {
    PhysicalAttack,
    SpiritualAttack,
    Defense,
}

/// Non-numeric keyword outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordSpecial {
    /// Target defense counts as 0
    IgnoreArmor,
    /// Incoming attack deals no damage
    Evade,
    /// Defender gains a one-round shield of the bonus value
    Fortify,
}

/// Numeric and special effect of a keyword in one context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeywordEffect {
    pub bonus_damage: i32,
    pub bonus_value: i32,
    pub special: Option<KeywordSpecial>,
}

impl KeywordEffect {
    pub fn none() -> Self {
        Self::default()
    }

    fn new(bonus_damage: i32, bonus_value: i32, special: Option<KeywordSpecial>) -> Self {
        Self {
            bonus_damage,
            bonus_value,
            special,
        }
    }

    /// Multiply the numeric bonuses, keeping the special
    pub fn scaled(self, factor: i32) -> Self {
        Self {
            bonus_damage: self.bonus_damage * factor,
            bonus_value: self.bonus_value * factor,
            special: self.special,
        }
    }

    /// Base effect of `keyword` in `context`, before suit scaling
    pub fn base(keyword: FateKeyword, context: ResolutionContext) -> Self {
        use KeywordSpecial::*;
        use ResolutionContext::*;

        match (keyword, context) {
            (FateKeyword::Surge, PhysicalAttack) => Self::new(2, 0, None),
            (FateKeyword::Surge, SpiritualAttack) => Self::new(1, 0, None),
            (FateKeyword::Surge, Defense) => Self::new(0, 1, None),

            (FateKeyword::Focus, PhysicalAttack) => Self::new(1, 0, Some(IgnoreArmor)),
            (FateKeyword::Focus, SpiritualAttack) => Self::new(2, 0, None),
            (FateKeyword::Focus, Defense) => Self::new(0, 1, None),

            (FateKeyword::Ward, PhysicalAttack) => Self::none(),
            (FateKeyword::Ward, SpiritualAttack) => Self::none(),
            (FateKeyword::Ward, Defense) => Self::new(0, 3, Some(Fortify)),

            (FateKeyword::Shadow, PhysicalAttack) => Self::new(1, 0, None),
            (FateKeyword::Shadow, SpiritualAttack) => Self::none(),
            (FateKeyword::Shadow, Defense) => Self::new(0, 0, Some(Evade)),
        }
    }
}

/// Suit favored by each context
pub fn favored_suit(context: ResolutionContext) -> FateSuit {
    match context {
        ResolutionContext::PhysicalAttack => FateSuit::Nav,
        ResolutionContext::SpiritualAttack => FateSuit::Prav,
        ResolutionContext::Defense => FateSuit::Yav,
    }
}

/// Whether `suit` is the one `context` favors
pub fn suit_matches(suit: FateSuit, context: ResolutionContext) -> bool {
    favored_suit(context) == suit
}

/// Keyword effect after the suit rule
///
/// Matching suit doubles the bonuses, a non-matching suit nullifies the
/// keyword, no suit leaves it at base magnitude.
pub fn keyword_effect(
    keyword: FateKeyword,
    suit: Option<FateSuit>,
    context: ResolutionContext,
) -> KeywordEffect {
    let base = KeywordEffect::base(keyword, context);
    match suit {
        None => base,
        Some(s) if suit_matches(s, context) => base.scaled(2),
        Some(_) => KeywordEffect::none(),
    }
}
