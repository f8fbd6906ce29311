//! Combat resolution
//!
//! Attacks, enemy intents, influence, round advance and outcome detection.
//! Every function takes explicit entity references and touches only the
//! world it is given. Fate draws are the only source of variance.

use crate::combat::constants::{FORTIFY_DURATION, TRACK_SWITCH_BONUS};
use crate::combat::events::CombatEvent;
use crate::combat::outcome::{CombatOutcome, VictoryKind};
use crate::core::error::{CombatError, Result};
use crate::core::rng::CombatRng;
use crate::core::types::EntityId;
use crate::ecs::world::CombatWorld;
use crate::entity::{DiplomacyTrack, Intent, StatusKind};
use crate::fate::{resolve, FateResolution, KeywordSpecial, ResolutionContext};

/// How incoming damage was split between shield and health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DamageReport {
    pub absorbed: i32,
    pub dealt: i32,
}

/// Apply damage through the target's shield, then to health
pub fn apply_damage(world: &mut CombatWorld, target: EntityId, amount: i32) -> Result<DamageReport> {
    let (remaining, absorbed) = match world.statuses.get_mut(target) {
        Some(statuses) => statuses.absorb(amount),
        None => (amount.max(0), 0),
    };
    let dealt = world.health.require_mut(target)?.take_damage(remaining);
    Ok(DamageReport { absorbed, dealt })
}

fn draw_fate(
    world: &mut CombatWorld,
    context: ResolutionContext,
    rng: &mut CombatRng,
) -> Result<FateResolution> {
    let resonance = world.resonance.value;
    resolve(context, &mut world.fate_deck, resonance, rng).ok_or(CombatError::FateDeckEmpty)
}

/// Move the player onto `track`; returns true when that was a switch
fn enter_track(world: &mut CombatWorld, player: EntityId, track: DiplomacyTrack) -> bool {
    world
        .diplomacy
        .get_mut(player)
        .map_or(false, |d| d.switch_to(track, TRACK_SWITCH_BONUS))
}

/// Physical attack from `player` on `enemy`
///
/// `bonus` is extra strength staged by committed cards. Hit iff the total
/// reaches the target's defense; a hit deals `total - defense + 1`.
pub fn player_attack(
    world: &mut CombatWorld,
    player: EntityId,
    enemy: EntityId,
    bonus: i32,
    rng: &mut CombatRng,
) -> Result<CombatEvent> {
    if world.fate_deck.is_empty() {
        return Err(CombatError::FateDeckEmpty);
    }
    let strength = world.effective_strength(player)? + bonus;
    let base_defense = world.participants.require(enemy)?.defense;
    world.health.require(enemy)?;

    if enter_track(world, player, DiplomacyTrack::Physical) {
        tracing::debug!("{} escalates back to force", player);
    }
    let rage_shield = world.diplomacy.get(player).map_or(0, |d| d.rage_shield);

    let fate = draw_fate(world, ResolutionContext::PhysicalAttack, rng)?;
    let total = strength + fate.bonus_damage() + fate.effective_value;
    let defense = if fate.keyword_effect.special == Some(KeywordSpecial::IgnoreArmor) {
        0
    } else {
        base_defense + rage_shield
    };

    if total < defense {
        tracing::debug!("{} misses {}: {} vs defense {}", player, enemy, total, defense);
        return Ok(CombatEvent::PlayerMissed {
            target: enemy,
            fate,
            total,
            defense,
        });
    }

    let damage = total - defense + 1;
    let report = apply_damage(world, enemy, damage)?;
    tracing::debug!(
        "{} hits {}: {} vs defense {}, {} damage ({} absorbed)",
        player,
        enemy,
        total,
        defense,
        damage,
        report.absorbed
    );
    Ok(CombatEvent::PlayerAttacked {
        target: enemy,
        fate,
        total,
        defense,
        damage,
        absorbed: report.absorbed,
    })
}

/// Execute and clear the queued intent of `enemy`
///
/// Returns `None` when nothing was queued or the enemy is down. Attack
/// damage is mitigated by a defense fate draw first, then by the player's
/// shield.
pub fn resolve_enemy_intent(
    world: &mut CombatWorld,
    enemy: EntityId,
    player: EntityId,
    rng: &mut CombatRng,
) -> Result<Option<CombatEvent>> {
    let Some(intent) = world.intents.get(enemy).copied() else {
        return Ok(None);
    };
    if intent.is_attack() && world.fate_deck.is_empty() {
        return Err(CombatError::FateDeckEmpty);
    }
    world.intents.remove(enemy);

    if world.health.require(enemy)?.is_down() {
        return Ok(None);
    }

    let event = match intent {
        Intent::Attack(amount) => {
            let raw = amount + world.statuses.get(enemy).map_or(0, |s| s.amount(StatusKind::Strength));
            let fate = draw_fate(world, ResolutionContext::Defense, rng)?;
            let special = fate.keyword_effect.special;
            let evaded = special == Some(KeywordSpecial::Evade);
            let mitigation = (fate.effective_value + fate.bonus_value()).max(0);

            let report = if evaded {
                DamageReport::default()
            } else {
                apply_damage(world, player, (raw - mitigation).max(0))?
            };

            if special == Some(KeywordSpecial::Fortify) && fate.bonus_value() > 0 {
                world
                    .statuses
                    .require_mut(player)?
                    .apply(StatusKind::Shield, fate.bonus_value(), FORTIFY_DURATION);
            }

            tracing::debug!(
                "{} attacks {} for {}: mitigated {}, absorbed {}, dealt {}{}",
                enemy,
                player,
                raw,
                mitigation,
                report.absorbed,
                report.dealt,
                if evaded { " (evaded)" } else { "" }
            );
            CombatEvent::EnemyAttacked {
                enemy,
                amount: raw,
                fate,
                mitigation,
                absorbed: report.absorbed,
                damage: report.dealt,
                evaded,
            }
        }
        Intent::Heal(amount) => {
            let healed = world.health.require_mut(enemy)?.heal(amount);
            CombatEvent::EnemyHealed {
                enemy,
                amount: healed,
            }
        }
        Intent::Ritual(amount) => {
            let shift = world.resonance.shift(-(amount as f32));
            CombatEvent::EnemyRitual {
                enemy,
                resonance_shift: shift,
            }
        }
    };
    Ok(Some(event))
}

/// Influence attempt: drains Will, never health
///
/// A target without Will left yields `InfluenceNotAvailable` and changes
/// nothing. Coming from the physical track switches to spiritual and grants
/// the surprise bonus before the total is computed.
pub fn player_influence(
    world: &mut CombatWorld,
    player: EntityId,
    enemy: EntityId,
    rng: &mut CombatRng,
) -> Result<CombatEvent> {
    if !world.health.require(enemy)?.has_will() {
        return Ok(CombatEvent::InfluenceNotAvailable { target: enemy });
    }
    if world.fate_deck.is_empty() {
        return Err(CombatError::FateDeckEmpty);
    }
    let strength = world.effective_strength(player)?;

    let track_switched = enter_track(world, player, DiplomacyTrack::Spiritual);
    let surprise = world.diplomacy.get(player).map_or(0, |d| d.surprise_bonus);

    let fate = draw_fate(world, ResolutionContext::SpiritualAttack, rng)?;
    let total = (strength + fate.bonus_damage() + fate.effective_value + surprise).max(0);
    let will_damage = world.health.require_mut(enemy)?.drain_will(total);

    tracing::debug!(
        "{} influences {}: total {} (surprise {}), Will -{}",
        player,
        enemy,
        total,
        surprise,
        will_damage
    );
    Ok(CombatEvent::PlayerInfluenced {
        target: enemy,
        fate,
        total,
        will_damage,
        track_switched,
    })
}

/// Terminal outcome, if any
///
/// Defeat wins ties. Victory needs every enemy down; it counts as killed if
/// any enemy died, pacified otherwise.
pub fn check_victory_or_defeat(world: &CombatWorld) -> Option<CombatOutcome> {
    let player = world.player()?;
    if world.health.get(player).map_or(true, |h| h.is_dead()) {
        return Some(CombatOutcome::Defeat);
    }

    let enemies = world.enemies();
    if enemies.is_empty() {
        return None;
    }

    let mut any_killed = false;
    for enemy in enemies {
        let health = world.health.get(enemy)?;
        if !health.is_down() {
            return None;
        }
        any_killed |= health.is_dead();
    }

    let kind = if any_killed {
        VictoryKind::Killed
    } else {
        VictoryKind::Pacified
    };
    Some(CombatOutcome::Victory(kind))
}

/// Advance to the next round
///
/// Clears leftover intents, ticks every status map in spawn order (poison
/// bypasses shields) and decays diplomacy bonuses.
pub fn advance_round(world: &mut CombatWorld) -> Vec<CombatEvent> {
    let round = world.combat_state.advance_round();
    let mut events = vec![CombatEvent::RoundAdvanced { round }];

    let entities = world.entities().to_vec();
    for entity in entities {
        world.intents.remove(entity);

        if let Some(statuses) = world.statuses.get_mut(entity) {
            let tick = statuses.tick();
            if tick.poison_damage > 0 {
                if let Some(health) = world.health.get_mut(entity) {
                    health.take_damage(tick.poison_damage);
                }
            }
            if tick.poison_damage > 0 || !tick.expired.is_empty() {
                events.push(CombatEvent::StatusTicked {
                    entity,
                    poison_damage: tick.poison_damage,
                    expired: tick.expired,
                });
            }
        }

        if let Some(diplomacy) = world.diplomacy.get_mut(entity) {
            diplomacy.decay();
        }
    }

    tracing::debug!("Round {} begins", round);
    events
}
