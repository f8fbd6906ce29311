//! Card effect application
//!
//! Shared by immediate play and the select-then-commit path. In commit mode
//! physical damage is staged as an attack bonus instead of being dealt.

use crate::cards::card::{Card, CardAbility, DamageType};
use crate::cards::system as deck_system;
use crate::combat::events::CombatEvent;
use crate::combat::resolution::apply_damage;
use crate::core::error::Result;
use crate::core::rng::CombatRng;
use crate::core::types::EntityId;
use crate::ecs::world::CombatWorld;
use crate::entity::StatusKind;

/// How physical damage abilities are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    /// Dealt to the target right away, boosted by the strength status
    Immediate,
    /// Accumulated into the bonus of the next attack
    Commit,
}

/// Everything one card did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardOutcome {
    pub damage: i32,
    pub will_damage: i32,
    pub heal: i32,
    pub cards_drawn: usize,
    pub statuses: Vec<StatusKind>,
    pub resonance_shift: f32,
    /// Physical damage staged for the committed attack
    pub attack_bonus: i32,
}

impl CardOutcome {
    pub fn into_event(self, card: &Card) -> CombatEvent {
        CombatEvent::CardPlayed {
            card_id: card.id.clone(),
            damage: self.damage,
            will_damage: self.will_damage,
            heal: self.heal,
            cards_drawn: self.cards_drawn,
            statuses: self.statuses,
            resonance_shift: self.resonance_shift,
            exhausted: card.exhaust,
        }
    }
}

fn target_alive(world: &CombatWorld, target: Option<EntityId>) -> Option<EntityId> {
    target.filter(|t| world.health.get(*t).map_or(false, |h| !h.is_dead()))
}

/// Apply every ability of `card` in declaration order
///
/// Damage and poison go to `target`; heals, shields and strength go to the
/// player. Abilities aimed at a missing or dead target are skipped.
pub fn apply_card(
    world: &mut CombatWorld,
    player: EntityId,
    target: Option<EntityId>,
    card: &Card,
    mode: PlayMode,
    rng: &mut CombatRng,
) -> Result<CardOutcome> {
    let mut outcome = CardOutcome::default();

    for ability in card.effective_abilities() {
        match ability {
            CardAbility::Damage {
                amount,
                damage_type: DamageType::Physical,
            } => {
                if mode == PlayMode::Commit {
                    outcome.attack_bonus += amount;
                    continue;
                }
                let Some(target) = target_alive(world, target) else {
                    continue;
                };
                let strength = world
                    .statuses
                    .get(player)
                    .map_or(0, |s| s.amount(StatusKind::Strength));
                let report = apply_damage(world, target, (amount + strength).max(0))?;
                outcome.damage += report.dealt;
            }
            CardAbility::Damage {
                amount,
                damage_type: DamageType::Mental,
            } => {
                let Some(target) = target_alive(world, target) else {
                    continue;
                };
                if world.health.require(target)?.has_will() {
                    outcome.will_damage += world.health.require_mut(target)?.drain_will(amount);
                } else {
                    outcome.damage += apply_damage(world, target, amount)?.dealt;
                }
            }
            CardAbility::Heal { amount } => {
                outcome.heal += world.health.require_mut(player)?.heal(amount);
            }
            CardAbility::DrawCards { count } => {
                outcome.cards_drawn += deck_system::draw(world, player, count, rng)?;
            }
            CardAbility::TemporaryStat {
                stat,
                amount,
                duration,
            } => {
                let recipient = match stat {
                    StatusKind::Poison => match target_alive(world, target) {
                        Some(enemy) => enemy,
                        None => continue,
                    },
                    StatusKind::Shield | StatusKind::Strength => player,
                };
                world
                    .statuses
                    .require_mut(recipient)?
                    .apply(stat, amount, duration);
                if duration > 0 && !outcome.statuses.contains(&stat) {
                    outcome.statuses.push(stat);
                }
            }
            CardAbility::ShiftBalance { pole, amount } => {
                outcome.resonance_shift += world.resonance.shift(pole.signed(amount));
            }
        }
    }

    tracing::debug!("{} plays {} ({:?}): {:?}", player, card.id, mode, outcome);
    Ok(outcome)
}
