//! Combat events and the encounter log
//!
//! Events are complete facts recorded after each step resolves. They are the
//! only observable output besides the final `CombatResult`.

use serde::{Deserialize, Serialize};

use crate::combat::outcome::CombatOutcome;
use crate::core::types::{EntityId, Round};
use crate::entity::StatusKind;
use crate::fate::FateResolution;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CombatEvent {
    CardPlayed {
        card_id: String,
        damage: i32,
        will_damage: i32,
        heal: i32,
        cards_drawn: usize,
        statuses: Vec<StatusKind>,
        resonance_shift: f32,
        exhausted: bool,
    },
    PlayerAttacked {
        target: EntityId,
        fate: FateResolution,
        total: i32,
        defense: i32,
        damage: i32,
        absorbed: i32,
    },
    PlayerMissed {
        target: EntityId,
        fate: FateResolution,
        total: i32,
        defense: i32,
    },
    EnemyAttacked {
        enemy: EntityId,
        amount: i32,
        fate: FateResolution,
        mitigation: i32,
        absorbed: i32,
        damage: i32,
        evaded: bool,
    },
    EnemyHealed {
        enemy: EntityId,
        amount: i32,
    },
    EnemyRitual {
        enemy: EntityId,
        resonance_shift: f32,
    },
    PlayerInfluenced {
        target: EntityId,
        fate: FateResolution,
        total: i32,
        will_damage: i32,
        track_switched: bool,
    },
    InsufficientEnergy {
        card_id: String,
        cost: u32,
        available: u32,
    },
    InfluenceNotAvailable {
        target: EntityId,
    },
    StatusTicked {
        entity: EntityId,
        poison_damage: i32,
        expired: Vec<StatusKind>,
    },
    RoundAdvanced {
        round: Round,
    },
    CombatEnded {
        outcome: CombatOutcome,
    },
}

impl CombatEvent {
    /// Rejected actions that changed nothing
    pub fn is_no_op(&self) -> bool {
        matches!(
            self,
            CombatEvent::InsufficientEnergy { .. } | CombatEvent::InfluenceNotAvailable { .. }
        )
    }
}

/// A logged event with its sequence number and round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedEvent {
    pub id: u32,
    pub round: Round,
    pub event: CombatEvent,
}

/// The complete event log of one encounter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatLog {
    pub events: Vec<LoggedEvent>,
    next_event_id: u32,
}

impl CombatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, round: Round, event: CombatEvent) -> u32 {
        let id = self.next_event_id;
        self.next_event_id += 1;
        self.events.push(LoggedEvent { id, round, event });
        id
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&CombatEvent> {
        self.events.last().map(|e| &e.event)
    }

    pub fn events_for_round(&self, round: Round) -> impl Iterator<Item = &CombatEvent> {
        self.events
            .iter()
            .filter(move |e| e.round == round)
            .map(|e| &e.event)
    }
}
