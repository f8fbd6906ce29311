//! ECS World - owns combat entities and their components
//!
//! Components are plain values stored per kind, keyed by entity. Systems look
//! them up explicitly; iteration order always follows spawn order.

use ahash::AHashMap;

use crate::cards::deck::Deck;
use crate::combat::state::CombatState;
use crate::core::error::{CombatError, Result};
use crate::core::types::EntityId;
use crate::entity::{
    CombatParticipant, Diplomacy, Energy, Health, Intent, ParticipantRole, StatusEffects,
};
use crate::fate::deck::FateDeck;
use crate::fate::resonance::Resonance;

/// Storage for one component kind
#[derive(Debug, Clone)]
pub struct ComponentStore<T> {
    name: &'static str,
    data: AHashMap<EntityId, T>,
}

impl<T> ComponentStore<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            data: AHashMap::new(),
        }
    }

    pub fn insert(&mut self, entity: EntityId, component: T) -> Option<T> {
        self.data.insert(entity, component)
    }

    pub fn get(&self, entity: EntityId) -> Option<&T> {
        self.data.get(&entity)
    }

    pub fn get_mut(&mut self, entity: EntityId) -> Option<&mut T> {
        self.data.get_mut(&entity)
    }

    pub fn remove(&mut self, entity: EntityId) -> Option<T> {
        self.data.remove(&entity)
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.data.contains_key(&entity)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Like `get`, but a missing component is an error
    pub fn require(&self, entity: EntityId) -> Result<&T> {
        self.data.get(&entity).ok_or(CombatError::ComponentNotFound {
            entity,
            component: self.name,
        })
    }

    pub fn require_mut(&mut self, entity: EntityId) -> Result<&mut T> {
        let component = self.name;
        self.data
            .get_mut(&entity)
            .ok_or(CombatError::ComponentNotFound { entity, component })
    }
}

/// The combat world containing all entities and combat-scoped state
#[derive(Debug, Clone)]
pub struct CombatWorld {
    next_id: u32,
    entities: Vec<EntityId>,

    pub health: ComponentStore<Health>,
    pub participants: ComponentStore<CombatParticipant>,
    pub intents: ComponentStore<Intent>,
    pub decks: ComponentStore<Deck>,
    pub energies: ComponentStore<Energy>,
    pub statuses: ComponentStore<StatusEffects>,
    pub diplomacy: ComponentStore<Diplomacy>,

    // Combat-scoped
    pub combat_state: CombatState,
    pub resonance: Resonance,
    pub fate_deck: FateDeck,
}

impl CombatWorld {
    pub fn new(fate_deck: FateDeck, resonance: Resonance) -> Self {
        Self {
            next_id: 1,
            entities: Vec::new(),
            health: ComponentStore::new("Health"),
            participants: ComponentStore::new("CombatParticipant"),
            intents: ComponentStore::new("Intent"),
            decks: ComponentStore::new("Deck"),
            energies: ComponentStore::new("Energy"),
            statuses: ComponentStore::new("StatusEffects"),
            diplomacy: ComponentStore::new("Diplomacy"),
            combat_state: CombatState::default(),
            resonance,
            fate_deck,
        }
    }

    /// Allocate a new entity. Every entity gets an empty status map.
    pub fn spawn(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.push(id);
        self.statuses.insert(id, StatusEffects::new());
        id
    }

    pub fn entities(&self) -> &[EntityId] {
        &self.entities
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.entities.contains(&entity)
    }

    fn with_role(&self, role: ParticipantRole) -> impl Iterator<Item = EntityId> + '_ {
        self.entities
            .iter()
            .copied()
            .filter(move |id| self.participants.get(*id).map_or(false, |p| p.role == role))
    }

    /// The player entity (first spawned with the player role)
    pub fn player(&self) -> Option<EntityId> {
        self.with_role(ParticipantRole::Player).next()
    }

    /// All enemies in spawn order
    pub fn enemies(&self) -> Vec<EntityId> {
        self.with_role(ParticipantRole::Enemy).collect()
    }

    /// Enemies that are neither dead nor pacified, in spawn order
    pub fn standing_enemies(&self) -> Vec<EntityId> {
        self.with_role(ParticipantRole::Enemy)
            .filter(|id| self.health.get(*id).map_or(false, |h| !h.is_down()))
            .collect()
    }

    /// Current strength including any active strength status
    pub fn effective_strength(&self, entity: EntityId) -> Result<i32> {
        let base = self.participants.require(entity)?.strength;
        let bonus = self
            .statuses
            .get(entity)
            .map_or(0, |s| s.amount(crate::entity::StatusKind::Strength));
        Ok(base + bonus)
    }
}
