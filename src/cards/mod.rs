//! Deck subsystem: cards, piles and entity-level deck operations

pub mod card;
pub mod deck;
pub mod system;

pub use card::{BalancePole, Card, CardAbility, DamageType};
pub use deck::Deck;
