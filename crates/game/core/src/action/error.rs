//! Action resolution errors.
//!
//! Every variant is reported before any combatant is mutated.

use crate::error::{ErrorSeverity, GameError};

/// Errors that can occur while resolving a single action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// Actor is defeated (health = 0).
    #[error("actor is defeated")]
    ActorDefeated,

    /// Target is already defeated.
    #[error("target is already defeated")]
    TargetDefeated,

    /// Skill costs more mana than the actor has.
    #[error("insufficient mana: requires {required}, has {available}")]
    InsufficientMana { required: u32, available: u32 },

    /// Skill index is not in the actor's skill list.
    #[error("unknown skill index {index}")]
    UnknownSkill { index: usize },

    /// Player actions need a typing performance.
    #[error("player action requires a typing performance")]
    PerformanceRequired,

    /// Only the player may flee.
    #[error("only the player can flee")]
    FleeNotAllowed,
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            ActorDefeated | TargetDefeated | InsufficientMana { .. } => ErrorSeverity::Recoverable,
            UnknownSkill { .. } | PerformanceRequired | FleeNotAllowed => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            ActorDefeated => "ACTION_ACTOR_DEFEATED",
            TargetDefeated => "ACTION_TARGET_DEFEATED",
            InsufficientMana { .. } => "ACTION_INSUFFICIENT_MANA",
            UnknownSkill { .. } => "ACTION_UNKNOWN_SKILL",
            PerformanceRequired => "ACTION_PERFORMANCE_REQUIRED",
            FleeNotAllowed => "ACTION_FLEE_NOT_ALLOWED",
        }
    }
}
