//! Enemy intent generation
//!
//! Scripted patterns cycle by round and never touch the RNG. Enemies without
//! a pattern roll a weighted intent on the combat generator.

use rand::Rng;

use crate::core::config::CombatConfig;
use crate::core::error::Result;
use crate::core::rng::CombatRng;
use crate::core::types::EntityId;
use crate::ecs::world::CombatWorld;
use crate::entity::Intent;

/// Queue the next intent for `enemy`
///
/// Leaves an already queued intent alone and does nothing for a dead or
/// pacified enemy. Returns the intent now queued, if any.
pub fn generate_intent(
    world: &mut CombatWorld,
    enemy: EntityId,
    config: &CombatConfig,
    rng: &mut CombatRng,
) -> Result<Option<Intent>> {
    if let Some(queued) = world.intents.get(enemy) {
        return Ok(Some(*queued));
    }

    let health = world.health.require(enemy)?;
    if health.is_down() {
        return Ok(None);
    }
    let at_full_health = health.is_full();

    let participant = world.participants.require(enemy)?;
    let intent = match pattern_step(&participant.intent_pattern, world.combat_state.round) {
        Some(step) => step,
        None => random_intent(participant.strength, at_full_health, config, rng),
    };

    tracing::debug!("{} ({}) intends {:?}", enemy, participant.name, intent);
    world.intents.insert(enemy, intent);
    Ok(Some(intent))
}

/// Pattern step for a round: `pattern[(round - 1) mod len]`, `None` for an empty pattern
pub fn pattern_step(pattern: &[Intent], round: u32) -> Option<Intent> {
    if pattern.is_empty() {
        return None;
    }
    let index = (round.saturating_sub(1) as usize) % pattern.len();
    pattern.get(index).copied()
}

/// Weighted random intent; a heal rolled at full health becomes an attack
pub fn random_intent(
    power: i32,
    at_full_health: bool,
    config: &CombatConfig,
    rng: &mut CombatRng,
) -> Intent {
    let roll = rng.gen_range(0..config.total_intent_weight().max(1));
    let heal_cutoff = config.attack_intent_weight + config.heal_intent_weight;

    if roll < config.attack_intent_weight {
        Intent::Attack(power)
    } else if roll < heal_cutoff {
        if at_full_health {
            Intent::Attack(power)
        } else {
            Intent::Heal(config.enemy_heal_amount)
        }
    } else {
        Intent::Ritual(config.ritual_shift_amount)
    }
}
