//! Encounter orchestrator
//!
//! Sequences subsystem calls per phase:
//! Setup -> PlayerTurn -> EnemyResolve -> PlayerTurn -> ... -> Victory | Defeat
//!
//! Every action returns the events it produced; the same events are appended
//! to the encounter log. Game-rule rejections come back as no-op events or
//! `false`, protocol misuse as `CombatError`.

use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::system as deck_system;
use crate::combat::effects::{apply_card, PlayMode};
use crate::combat::events::{CombatEvent, CombatLog};
use crate::combat::intent::generate_intent;
use crate::combat::outcome::{CombatOutcome, CombatResult};
use crate::combat::resolution::{
    advance_round, check_victory_or_defeat, player_attack, player_influence, resolve_enemy_intent,
};
use crate::combat::selection::CardSelection;
use crate::combat::state::CombatPhase;
use crate::core::config::CombatConfig;
use crate::core::error::{CombatError, Result};
use crate::core::rng::{seeded_rng, CombatRng};
use crate::core::types::{EntityId, Round};
use crate::content::EncounterDefinition;
use crate::ecs::world::CombatWorld;
use crate::entity::{Diplomacy, Energy, Health};
use crate::fate::{FateDeck, Resonance};

/// One running combat
#[derive(Debug, Clone)]
pub struct Combat {
    world: CombatWorld,
    rng: CombatRng,
    config: CombatConfig,
    player: EntityId,
    target: Option<EntityId>,
    selection: CardSelection,
    log: CombatLog,
    result: Option<CombatResult>,
}

impl Combat {
    /// Build the world for an encounter; the combat starts in `Setup`
    pub fn new(definition: EncounterDefinition) -> Result<Self> {
        if definition.enemies.is_empty() {
            return Err(CombatError::NoTarget);
        }
        definition.validate().map_err(CombatError::InvalidConfig)?;

        let mut rng = seeded_rng(definition.seed);
        let fate_deck = FateDeck::new(definition.fate_deck.clone(), &mut rng);
        let mut world = CombatWorld::new(fate_deck, Resonance::new(definition.resonance));

        let player_def = &definition.player;
        let player = world.spawn();
        world.participants.insert(player, player_def.participant());
        world.health.insert(player, Health::new(player_def.health));
        world.energies.insert(player, Energy::new(player_def.energy));
        world.decks.insert(player, Deck::new(player_def.deck.clone()));
        if definition.has_diplomacy() {
            world.diplomacy.insert(player, Diplomacy::new());
        }

        for enemy_def in &definition.enemies {
            let enemy = world.spawn();
            world.participants.insert(enemy, enemy_def.participant());
            world.health.insert(enemy, enemy_def.health_component());
        }

        let target = world.enemies().first().copied();
        tracing::debug!(
            "Combat created: seed {}, {} enemies, {} fate cards",
            definition.seed,
            definition.enemies.len(),
            world.fate_deck.total_cards()
        );

        Ok(Self {
            world,
            rng,
            config: definition.config,
            player,
            target,
            selection: CardSelection::new(),
            log: CombatLog::new(),
            result: None,
        })
    }

    // === ACCESSORS ===

    pub fn phase(&self) -> CombatPhase {
        self.world.combat_state.phase
    }

    pub fn round(&self) -> Round {
        self.world.combat_state.round
    }

    pub fn is_over(&self) -> bool {
        self.world.combat_state.is_over()
    }

    /// Consequence summary, present once the combat is over
    pub fn result(&self) -> Option<&CombatResult> {
        self.result.as_ref()
    }

    pub fn log(&self) -> &CombatLog {
        &self.log
    }

    pub fn world(&self) -> &CombatWorld {
        &self.world
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn player(&self) -> EntityId {
        self.player
    }

    pub fn enemies(&self) -> Vec<EntityId> {
        self.world.enemies()
    }

    /// Current attack and influence target
    pub fn target(&self) -> Option<EntityId> {
        self.target
    }

    pub fn hand(&self) -> &[Card] {
        self.world
            .decks
            .get(self.player)
            .map(|d| d.hand.as_slice())
            .unwrap_or(&[])
    }

    pub fn deck(&self) -> Option<&Deck> {
        self.world.decks.get(self.player)
    }

    pub fn energy(&self) -> u32 {
        self.world.energies.get(self.player).map_or(0, |e| e.current)
    }

    pub fn reserved_energy(&self) -> u32 {
        self.selection.reserved()
    }

    pub fn selection(&self) -> &CardSelection {
        &self.selection
    }

    pub fn resonance(&self) -> f32 {
        self.world.resonance.value
    }

    // === ACTIONS ===

    /// Setup -> PlayerTurn: opening hand and first intents
    pub fn begin_combat(&mut self) -> Result<()> {
        self.require_phase(CombatPhase::Setup)?;

        let drawn = deck_system::initialize_combat_hand(
            &mut self.world,
            self.player,
            self.config.opening_hand_size,
            &mut self.rng,
        )?;
        self.world.combat_state.is_active = true;
        self.queue_intents()?;
        self.set_phase(CombatPhase::PlayerTurn);
        tracing::info!("Combat begins: opening hand of {}", drawn);
        Ok(())
    }

    /// Aim attacks and influence at a standing enemy
    pub fn select_target(&mut self, enemy: EntityId) -> Result<()> {
        if !self.world.enemies().contains(&enemy) {
            return Err(CombatError::EntityNotFound(enemy));
        }
        if self.world.health.require(enemy)?.is_down() {
            return Err(CombatError::NoTarget);
        }
        self.target = Some(enemy);
        Ok(())
    }

    /// Play one card with immediate effect
    pub fn play_card(&mut self, card_id: &str) -> Result<Vec<CombatEvent>> {
        self.require_phase(CombatPhase::PlayerTurn)?;
        let card = self
            .hand()
            .iter()
            .find(|c| c.id == card_id)
            .cloned()
            .ok_or_else(|| CombatError::CardNotInHand(card_id.to_string()))?;

        let mut events = Vec::new();
        let available = self.selection.available(self.energy());
        let spent =
            card.cost <= available && self.world.energies.require_mut(self.player)?.spend(card.cost);
        if !spent {
            self.record(
                &mut events,
                CombatEvent::InsufficientEnergy {
                    card_id: card.id,
                    cost: card.cost,
                    available,
                },
            );
            return Ok(events);
        }

        deck_system::play(&mut self.world, self.player, card_id)?;
        // A staged copy that just left the hand can no longer be committed
        if self.selection.count(card_id) > self.copies_in_hand(card_id) {
            self.selection.deselect(card_id);
        }

        let target = self.current_target();
        let outcome = apply_card(
            &mut self.world,
            self.player,
            target,
            &card,
            PlayMode::Immediate,
            &mut self.rng,
        )?;
        self.record(&mut events, outcome.into_event(&card));
        self.check_outcome(&mut events);
        Ok(events)
    }

    /// Stage a card for the next committed attack
    ///
    /// False, with nothing changed, outside the player turn, for a card not
    /// in hand, or when its cost exceeds the unreserved energy.
    pub fn select_card(&mut self, card_id: &str) -> bool {
        if self.phase() != CombatPhase::PlayerTurn {
            return false;
        }
        let Some(cost) = self.hand().iter().find(|c| c.id == card_id).map(|c| c.cost) else {
            return false;
        };
        let energy = self.energy();
        let in_hand = self.copies_in_hand(card_id);
        self.selection.select(card_id, cost, energy, in_hand)
    }

    pub fn deselect_card(&mut self, card_id: &str) -> bool {
        self.selection.deselect(card_id)
    }

    /// Apply the staged cards, then resolve exactly one attack
    ///
    /// The selection is cleared whether or not the commit succeeds.
    pub fn commit_attack(&mut self) -> Result<Vec<CombatEvent>> {
        self.require_phase(CombatPhase::PlayerTurn)?;
        let staged = self.selection.take();

        if self.world.fate_deck.is_empty() {
            return Err(CombatError::FateDeckEmpty);
        }
        let target = self.current_target().ok_or(CombatError::NoTarget)?;

        let reserved: u32 = staged.iter().map(|s| s.cost).sum();
        let energy = self.world.energies.require_mut(self.player)?;
        energy.current = energy.current.saturating_sub(reserved);

        let mut events = Vec::new();
        let mut bonus = 0;
        for entry in &staged {
            let card = deck_system::play(&mut self.world, self.player, &entry.card_id)?;
            let outcome = apply_card(
                &mut self.world,
                self.player,
                Some(target),
                &card,
                PlayMode::Commit,
                &mut self.rng,
            )?;
            bonus += outcome.attack_bonus;
            self.record(&mut events, outcome.into_event(&card));
        }

        if self.world.health.require(target)?.is_down() {
            tracing::debug!("{} went down before the committed attack", target);
        } else {
            let event = player_attack(&mut self.world, self.player, target, bonus, &mut self.rng)?;
            self.record(&mut events, event);
        }
        self.check_outcome(&mut events);
        Ok(events)
    }

    /// Try to drain the target's Will instead of its health
    pub fn influence(&mut self) -> Result<Vec<CombatEvent>> {
        self.require_phase(CombatPhase::PlayerTurn)?;
        let target = self.current_target().ok_or(CombatError::NoTarget)?;

        let mut events = Vec::new();
        let event = player_influence(&mut self.world, self.player, target, &mut self.rng)?;
        self.record(&mut events, event);
        self.check_outcome(&mut events);
        Ok(events)
    }

    /// One-time redraw of named hand cards, only in the first player turn
    pub fn mulligan(&mut self, card_ids: &[String]) -> Result<usize> {
        if self.phase() != CombatPhase::PlayerTurn || self.round() != 1 {
            return Err(CombatError::MulliganUnavailable);
        }
        let redrawn = deck_system::mulligan(&mut self.world, self.player, card_ids, &mut self.rng)?;
        self.selection.clear();
        Ok(redrawn)
    }

    /// PlayerTurn -> EnemyResolve; a decided combat stays where it is
    pub fn end_turn(&mut self) -> Result<()> {
        if self.is_over() {
            return Ok(());
        }
        self.require_phase(CombatPhase::PlayerTurn)?;
        self.selection.clear();
        self.set_phase(CombatPhase::EnemyResolve);
        Ok(())
    }

    /// Run every queued intent, then start the next round
    pub fn resolve_enemy_turn(&mut self) -> Result<Vec<CombatEvent>> {
        self.require_phase(CombatPhase::EnemyResolve)?;
        let mut events = Vec::new();

        for enemy in self.world.standing_enemies() {
            let resolved = resolve_enemy_intent(&mut self.world, enemy, self.player, &mut self.rng)?;
            if let Some(event) = resolved {
                self.record(&mut events, event);
            }
            if self.check_outcome(&mut events) {
                return Ok(events);
            }
        }

        for event in advance_round(&mut self.world) {
            self.record(&mut events, event);
        }
        // Poison may have decided it
        if self.check_outcome(&mut events) {
            return Ok(events);
        }

        self.world.energies.require_mut(self.player)?.restore();
        deck_system::draw(
            &mut self.world,
            self.player,
            self.config.cards_drawn_per_round,
            &mut self.rng,
        )?;
        self.queue_intents()?;
        self.set_phase(CombatPhase::PlayerTurn);
        Ok(events)
    }

    // === INTERNALS ===

    fn require_phase(&self, expected: CombatPhase) -> Result<()> {
        let actual = self.phase();
        if actual == expected {
            Ok(())
        } else {
            Err(CombatError::WrongPhase { expected, actual })
        }
    }

    fn set_phase(&mut self, phase: CombatPhase) {
        tracing::info!(
            "Round {}: {:?} -> {:?}",
            self.round(),
            self.world.combat_state.phase,
            phase
        );
        self.world.combat_state.phase = phase;
    }

    fn record(&mut self, events: &mut Vec<CombatEvent>, event: CombatEvent) {
        self.log.push(self.world.combat_state.round, event.clone());
        events.push(event);
    }

    fn copies_in_hand(&self, card_id: &str) -> usize {
        self.hand().iter().filter(|c| c.id == card_id).count()
    }

    /// The chosen target if still standing, else the first standing enemy
    fn current_target(&mut self) -> Option<EntityId> {
        let standing = self.world.standing_enemies();
        if self.target.map_or(true, |t| !standing.contains(&t)) {
            self.target = standing.first().copied();
        }
        self.target
    }

    fn queue_intents(&mut self) -> Result<()> {
        for enemy in self.world.standing_enemies() {
            generate_intent(&mut self.world, enemy, &self.config, &mut self.rng)?;
        }
        Ok(())
    }

    /// Lock the combat if an outcome is reached; returns true when it did
    fn check_outcome(&mut self, events: &mut Vec<CombatEvent>) -> bool {
        match check_victory_or_defeat(&self.world) {
            Some(outcome) => {
                self.finish(outcome, events);
                true
            }
            None => false,
        }
    }

    fn finish(&mut self, outcome: CombatOutcome, events: &mut Vec<CombatEvent>) {
        if self.result.is_some() {
            return;
        }
        let phase = if outcome.is_victory() {
            CombatPhase::Victory
        } else {
            CombatPhase::Defeat
        };
        self.set_phase(phase);
        self.world.combat_state.is_active = false;
        self.selection.clear();

        let (faith_delta, loot_card_ids) = if outcome.is_victory() {
            let enemies = self.world.enemies();
            let rewards = enemies.iter().filter_map(|e| self.world.participants.get(*e));
            rewards.fold((0, Vec::new()), |(faith, mut loot), p| {
                loot.extend(p.loot_card_ids.iter().cloned());
                (faith + p.faith_reward, loot)
            })
        } else {
            (0, Vec::new())
        };

        let result = CombatResult {
            outcome,
            resonance_delta: outcome.resonance_delta(),
            faith_delta,
            loot_card_ids,
            fate_deck_state: self.world.fate_deck.state(),
            player_health: self.world.health.get(self.player).map_or(0, |h| h.current()),
            rounds: self.round(),
            final_resonance: self.world.resonance.value,
        };
        tracing::info!(
            "Combat ended after {} rounds: {:?} (resonance {:+}, faith {:+})",
            result.rounds,
            outcome,
            result.resonance_delta,
            result.faith_delta
        );
        self.result = Some(result);
        self.record(events, CombatEvent::CombatEnded { outcome });
    }
}
