//! Fate deck: draw and discard piles of fate cards

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::core::rng::CombatRng;
use crate::fate::card::FateCard;

/// Serializable snapshot of a fate deck, enough to continue drawing later
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FateDeckState {
    pub draw_pile: Vec<FateCard>,
    pub discard_pile: Vec<FateCard>,
}

/// Fate deck resource
///
/// Drawn cards go to the discard pile, which is reshuffled into the draw
/// pile once it runs out. The top of the draw pile is its last element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FateDeck {
    draw_pile: Vec<FateCard>,
    discard_pile: Vec<FateCard>,
}

impl FateDeck {
    /// Build a deck and shuffle it with the combat generator
    pub fn new(mut cards: Vec<FateCard>, rng: &mut CombatRng) -> Self {
        cards.shuffle(rng);
        Self {
            draw_pile: cards,
            discard_pile: Vec::new(),
        }
    }

    /// Restore a deck exactly as snapshotted, without reshuffling
    pub fn from_state(state: FateDeckState) -> Self {
        Self {
            draw_pile: state.draw_pile,
            discard_pile: state.discard_pile,
        }
    }

    pub fn state(&self) -> FateDeckState {
        FateDeckState {
            draw_pile: self.draw_pile.clone(),
            discard_pile: self.discard_pile.clone(),
        }
    }

    /// No cards anywhere in the deck
    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty() && self.discard_pile.is_empty()
    }

    /// Cards left before the next reshuffle
    pub fn remaining(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn total_cards(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    /// Draw the next card, reshuffling the discard pile if needed
    pub fn draw(&mut self, rng: &mut CombatRng) -> Option<FateCard> {
        if self.draw_pile.is_empty() {
            if self.discard_pile.is_empty() {
                return None;
            }
            self.draw_pile.append(&mut self.discard_pile);
            self.draw_pile.shuffle(rng);
            tracing::debug!("Fate deck reshuffled ({} cards)", self.draw_pile.len());
        }
        let card = self.draw_pile.pop()?;
        self.discard_pile.push(card.clone());
        Some(card)
    }

    /// Add a card to the discard pile; it joins the draw pile at the next reshuffle
    pub fn add_card(&mut self, card: FateCard) {
        self.discard_pile.push(card);
    }

    /// Remove one card by id from either pile
    ///
    /// Sticky cards stay put. Returns true if a card was removed.
    pub fn remove_card(&mut self, id: &str) -> bool {
        for pile in [&mut self.draw_pile, &mut self.discard_pile] {
            if let Some(index) = pile.iter().position(|c| c.id == id) {
                if pile[index].is_sticky {
                    return false;
                }
                pile.remove(index);
                return true;
            }
        }
        false
    }
}
