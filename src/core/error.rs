use thiserror::Error;

use crate::combat::state::CombatPhase;
use crate::core::types::EntityId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CombatError {
    #[error("Entity not found: {0}")]
    EntityNotFound(EntityId),

    #[error("Component {component} not found for entity {entity}")]
    ComponentNotFound {
        entity: EntityId,
        component: &'static str,
    },

    #[error("Action not allowed in phase {actual:?} (expected {expected:?})")]
    WrongPhase {
        expected: CombatPhase,
        actual: CombatPhase,
    },

    #[error("Card not in hand: {0}")]
    CardNotInHand(String),

    #[error("Mulligan is no longer available")]
    MulliganUnavailable,

    #[error("Fate deck has no cards to draw")]
    FateDeckEmpty,

    #[error("No standing enemy to target")]
    NoTarget,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CombatError>;
