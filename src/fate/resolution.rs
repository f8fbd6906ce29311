//! Fate resolution service
//!
//! Turns one drawn fate card into a context-dependent value and keyword
//! effect. Stateless apart from the deck it draws from.

use serde::{Deserialize, Serialize};

use crate::core::rng::CombatRng;
use crate::fate::card::{FateCard, FateKeyword};
use crate::fate::deck::FateDeck;
use crate::fate::keyword::{keyword_effect, suit_matches, KeywordEffect, ResolutionContext};
use crate::fate::resonance::ResonanceZone;

/// Outcome of resolving one fate card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FateResolution {
    pub card: FateCard,
    pub context: ResolutionContext,
    /// Base value adjusted by the card's resonance rules
    pub effective_value: i32,
    pub keyword: Option<FateKeyword>,
    /// Keyword effect after suit scaling
    pub keyword_effect: KeywordEffect,
    /// None when the card has no suit
    pub suit_match: Option<bool>,
    pub is_critical: bool,
}

impl FateResolution {
    /// Resolve an already drawn card
    pub fn from_card(card: FateCard, context: ResolutionContext, world_resonance: f32) -> Self {
        let zone = ResonanceZone::from_value(world_resonance);
        let effective_value = card.effective_value(zone);
        let keyword_effect = match card.keyword {
            Some(keyword) => keyword_effect(keyword, card.suit, context),
            None => KeywordEffect::none(),
        };
        Self {
            context,
            effective_value,
            keyword: card.keyword,
            keyword_effect,
            suit_match: card.suit.map(|s| suit_matches(s, context)),
            is_critical: card.is_critical,
            card,
        }
    }

    pub fn bonus_damage(&self) -> i32 {
        self.keyword_effect.bonus_damage
    }

    pub fn bonus_value(&self) -> i32 {
        self.keyword_effect.bonus_value
    }
}

/// Draw the next fate card and resolve it for `context`
///
/// Returns `None` only when the deck holds no cards at all.
pub fn resolve(
    context: ResolutionContext,
    fate_deck: &mut FateDeck,
    world_resonance: f32,
    rng: &mut CombatRng,
) -> Option<FateResolution> {
    let card = fate_deck.draw(rng)?;
    let resolution = FateResolution::from_card(card, context, world_resonance);
    tracing::debug!(
        "Fate {} in {:?}: value {}, keyword {:?}, suit match {:?}",
        resolution.card.id,
        context,
        resolution.effective_value,
        resolution.keyword,
        resolution.suit_match
    );
    Some(resolution)
}
