//! Ordered card piles
//!
//! A card lives in exactly one pile at a time. The top of the draw pile is
//! its last element. The exhaust pile is a sink: nothing ever leaves it.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::cards::card::Card;
use crate::core::rng::CombatRng;

/// Deck component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub draw_pile: Vec<Card>,
    pub hand: Vec<Card>,
    pub discard_pile: Vec<Card>,
    pub exhaust_pile: Vec<Card>,
}

impl Deck {
    /// All cards start in the draw pile, unshuffled
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            draw_pile: cards,
            ..Self::default()
        }
    }

    /// Cards across all four piles
    pub fn total_cards(&self) -> usize {
        self.circulating_cards() + self.exhaust_pile.len()
    }

    /// Cards that can still be drawn, held or recycled
    pub fn circulating_cards(&self) -> usize {
        self.draw_pile.len() + self.hand.len() + self.discard_pile.len()
    }

    pub fn hand_card(&self, id: &str) -> Option<&Card> {
        self.hand.iter().find(|c| c.id == id)
    }

    fn take_from_hand(&mut self, id: &str) -> Option<Card> {
        let index = self.hand.iter().position(|c| c.id == id)?;
        Some(self.hand.remove(index))
    }

    /// Shuffle the discard pile under whatever is left in the draw pile
    fn recycle_discard(&mut self, rng: &mut CombatRng) {
        let mut recycled = std::mem::take(&mut self.discard_pile);
        recycled.shuffle(rng);
        recycled.append(&mut self.draw_pile);
        self.draw_pile = recycled;
    }

    /// Draw up to `count` cards into the hand
    ///
    /// Recycles the discard pile when the draw pile runs out and stops
    /// quietly when both are empty. Returns the number of cards drawn.
    pub fn draw(&mut self, count: usize, rng: &mut CombatRng) -> usize {
        let mut drawn = 0;
        while drawn < count {
            if self.draw_pile.is_empty() {
                if self.discard_pile.is_empty() {
                    break;
                }
                self.recycle_discard(rng);
            }
            match self.draw_pile.pop() {
                Some(card) => {
                    self.hand.push(card);
                    drawn += 1;
                }
                None => break,
            }
        }
        drawn
    }

    /// Move one named hand card to the discard pile
    pub fn discard(&mut self, id: &str) -> bool {
        match self.take_from_hand(id) {
            Some(card) => {
                self.discard_pile.push(card);
                true
            }
            None => false,
        }
    }

    /// Remove a hand card for play and route it by its exhaust flag
    ///
    /// Returns a copy of the played card.
    pub fn play(&mut self, id: &str) -> Option<Card> {
        let card = self.take_from_hand(id)?;
        let played = card.clone();
        if card.exhaust {
            self.exhaust_pile.push(card);
        } else {
            self.discard_pile.push(card);
        }
        Some(played)
    }

    /// Return named hand cards to the pool, reshuffle and redraw as many
    ///
    /// Ids not in hand are skipped. Returns the number of cards redrawn.
    pub fn mulligan(&mut self, ids: &[String], rng: &mut CombatRng) -> usize {
        let mut returned = 0;
        for id in ids {
            if let Some(card) = self.take_from_hand(id) {
                self.draw_pile.push(card);
                returned += 1;
            }
        }
        if returned == 0 {
            return 0;
        }
        self.draw_pile.append(&mut self.discard_pile);
        self.draw_pile.shuffle(rng);
        self.draw(returned, rng)
    }

    /// Merge every circulating pile, shuffle and draw the opening hand
    pub fn initialize_combat_hand(&mut self, hand_size: usize, rng: &mut CombatRng) -> usize {
        self.draw_pile.append(&mut self.hand);
        self.draw_pile.append(&mut self.discard_pile);
        self.draw_pile.shuffle(rng);
        self.draw(hand_size, rng)
    }
}
