//! Errors surfaced by the battle state machine.

use super::BattlePhase;
use crate::action::ActionError;
use crate::combatant::Side;
use crate::error::{ErrorSeverity, GameError};

/// Rejections from [`super::Battle`] operations.
///
/// Returned before any mutation: a rejected call leaves the battle exactly as
/// it was.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    /// Operation not allowed in the current phase.
    #[error("cannot {operation} while battle is {phase}")]
    InvalidTransition {
        phase: BattlePhase,
        operation: &'static str,
    },

    /// Action submitted by a combatant that does not hold the turn.
    #[error("not {got}'s turn (current actor: {expected})")]
    NotActorsTurn { expected: Side, got: Side },

    /// The resolver rejected the action.
    #[error(transparent)]
    Action(#[from] ActionError),
}

impl BattleError {
    pub(crate) fn invalid_transition(phase: BattlePhase, operation: &'static str) -> Self {
        Self::InvalidTransition { phase, operation }
    }
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidTransition { .. } | Self::NotActorsTurn { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::Action(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "BATTLE_INVALID_TRANSITION",
            Self::NotActorsTurn { .. } => "BATTLE_NOT_ACTORS_TURN",
            Self::Action(error) => error.error_code(),
        }
    }
}
