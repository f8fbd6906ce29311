//! Select-then-commit staging
//!
//! Holds card ids and their reserved cost between `select_card` and
//! `commit_attack`. Reservations never touch the energy component; energy is
//! only spent when the selection is committed.

use serde::{Deserialize, Serialize};

/// One staged card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedCard {
    pub card_id: String,
    pub cost: u32,
}

/// Cards staged for the next committed attack, in selection order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSelection {
    entries: Vec<SelectedCard>,
    reserved: u32,
}

impl CardSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reserved(&self) -> u32 {
        self.reserved
    }

    /// Energy still free to reserve out of `energy`
    pub fn available(&self, energy: u32) -> u32 {
        energy.saturating_sub(self.reserved)
    }

    /// How many copies of `card_id` are already staged
    pub fn count(&self, card_id: &str) -> usize {
        self.entries.iter().filter(|e| e.card_id == card_id).count()
    }

    /// Stage a card if its cost fits and another copy is free in hand
    ///
    /// `in_hand` is the number of copies of `card_id` currently in hand.
    /// Returns false and changes nothing otherwise.
    pub fn select(&mut self, card_id: &str, cost: u32, energy: u32, in_hand: usize) -> bool {
        if cost > self.available(energy) || self.count(card_id) >= in_hand {
            return false;
        }
        self.entries.push(SelectedCard {
            card_id: card_id.to_string(),
            cost,
        });
        self.reserved += cost;
        true
    }

    /// Release the most recently staged copy of `card_id`
    pub fn deselect(&mut self, card_id: &str) -> bool {
        match self.entries.iter().rposition(|e| e.card_id == card_id) {
            Some(index) => {
                let entry = self.entries.remove(index);
                self.reserved -= entry.cost;
                true
            }
            None => false,
        }
    }

    /// Empty the selection, returning the staged cards
    pub fn take(&mut self) -> Vec<SelectedCard> {
        self.reserved = 0;
        std::mem::take(&mut self.entries)
    }

    pub fn clear(&mut self) {
        self.take();
    }

    pub fn card_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.card_id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_budget_selection_rejected_without_mutation() {
        let mut selection = CardSelection::new();
        assert!(!selection.select("heavy", 5, 3, 1));
        assert!(selection.is_empty());
        assert_eq!(selection.reserved(), 0);
    }

    #[test]
    fn test_reservations_accumulate_and_release() {
        let mut selection = CardSelection::new();
        assert!(selection.select("a", 1, 3, 1));
        assert!(selection.select("b", 2, 3, 1));
        assert_eq!(selection.available(3), 0);
        assert!(!selection.select("c", 1, 3, 1));

        assert!(selection.deselect("a"));
        assert_eq!(selection.reserved(), 2);
        assert!(!selection.deselect("a"));
        assert_eq!(selection.card_ids().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_duplicates_limited_by_copies_in_hand() {
        let mut selection = CardSelection::new();
        assert!(selection.select("strike", 1, 5, 2));
        assert!(selection.select("strike", 1, 5, 2));
        assert!(!selection.select("strike", 1, 5, 2));
        assert_eq!(selection.count("strike"), 2);
    }

    #[test]
    fn test_take_resets_reservation() {
        let mut selection = CardSelection::new();
        selection.select("a", 2, 3, 1);
        let staged = selection.take();
        assert_eq!(staged.len(), 1);
        assert_eq!(selection.reserved(), 0);
        assert!(selection.is_empty());
    }
}
