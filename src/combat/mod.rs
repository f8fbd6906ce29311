//! Combat core: resolution, intents, card effects and the encounter orchestrator

pub mod constants;
pub mod effects;
pub mod encounter;
pub mod events;
pub mod intent;
pub mod outcome;
pub mod resolution;
pub mod selection;
pub mod state;

pub use effects::{apply_card, CardOutcome, PlayMode};
pub use encounter::Combat;
pub use events::{CombatEvent, CombatLog, LoggedEvent};
pub use outcome::{CombatOutcome, CombatResult, VictoryKind};
pub use resolution::{
    advance_round, apply_damage, check_victory_or_defeat, player_attack, player_influence,
    resolve_enemy_intent, DamageReport,
};
pub use selection::{CardSelection, SelectedCard};
pub use state::{CombatPhase, CombatState};
