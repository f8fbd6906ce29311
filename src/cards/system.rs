//! Deck operations addressed by entity
//!
//! Thin wrappers that look the deck up in the world and enforce the
//! combat-scoped rules (one mulligan, one opening hand).

use crate::cards::card::Card;
use crate::core::error::{CombatError, Result};
use crate::core::rng::CombatRng;
use crate::core::types::EntityId;
use crate::ecs::world::CombatWorld;

/// Draw up to `count` cards for `entity`; returns how many were drawn
pub fn draw(
    world: &mut CombatWorld,
    entity: EntityId,
    count: usize,
    rng: &mut CombatRng,
) -> Result<usize> {
    let drawn = world.decks.require_mut(entity)?.draw(count, rng);
    if drawn < count {
        tracing::debug!("{} under-drew: {} of {} cards", entity, drawn, count);
    }
    Ok(drawn)
}

/// Discard one named hand card
pub fn discard(world: &mut CombatWorld, entity: EntityId, card_id: &str) -> Result<()> {
    if world.decks.require_mut(entity)?.discard(card_id) {
        Ok(())
    } else {
        Err(CombatError::CardNotInHand(card_id.to_string()))
    }
}

/// Remove a card from hand for play, routing it to discard or exhaust
pub fn play(world: &mut CombatWorld, entity: EntityId, card_id: &str) -> Result<Card> {
    world
        .decks
        .require_mut(entity)?
        .play(card_id)
        .ok_or_else(|| CombatError::CardNotInHand(card_id.to_string()))
}

/// One-time mulligan; returns how many cards were redrawn
pub fn mulligan(
    world: &mut CombatWorld,
    entity: EntityId,
    card_ids: &[String],
    rng: &mut CombatRng,
) -> Result<usize> {
    if world.combat_state.mulligan_done {
        return Err(CombatError::MulliganUnavailable);
    }
    let redrawn = world.decks.require_mut(entity)?.mulligan(card_ids, rng);
    world.combat_state.mulligan_done = true;
    tracing::debug!("{} mulliganed {} cards", entity, redrawn);
    Ok(redrawn)
}

/// Shuffle everything in circulation and draw the opening hand
pub fn initialize_combat_hand(
    world: &mut CombatWorld,
    entity: EntityId,
    hand_size: usize,
    rng: &mut CombatRng,
) -> Result<usize> {
    Ok(world
        .decks
        .require_mut(entity)?
        .initialize_combat_hand(hand_size, rng))
}
