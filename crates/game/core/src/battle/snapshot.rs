//! Serializable mid-battle state.
//!
//! [`BattleData`] is the `battleData` record of a save slot. The required
//! fields are the save-file shape (`enemyName`, `enemyHealth`,
//! `enemyMaxHealth`, optional `currentChallenge`); the remaining fields carry
//! the round position so a restored battle resumes exactly where it stopped,
//! and default when absent.

use crate::combatant::Side;
use crate::error::{ErrorSeverity, GameError};
use crate::typing::TypingChallenge;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BattleData {
    pub enemy_name: String,
    pub enemy_health: u32,
    pub enemy_max_health: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_challenge: Option<TypingChallenge>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub enemy_mana: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default = "first_round"))]
    pub round: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub turn_count: u32,
    /// The round's turn order as it was computed at round start. Recomputed
    /// from current stats when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub turn_order: Option<Vec<Side>>,
    /// Index of the current actor in the round's turn order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub turn_position: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub action_points_remaining: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub guarding: Option<Side>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub reward_points: u32,
}

#[cfg(feature = "serde")]
fn first_round() -> u32 {
    1
}

impl BattleData {
    /// Minimal record in the save-file shape; round position starts fresh.
    pub fn new(enemy_name: impl Into<String>, enemy_health: u32, enemy_max_health: u32) -> Self {
        Self {
            enemy_name: enemy_name.into(),
            enemy_health,
            enemy_max_health,
            current_challenge: None,
            enemy_mana: None,
            round: 1,
            turn_count: 0,
            turn_order: None,
            turn_position: 0,
            action_points_remaining: None,
            guarding: None,
            reward_points: 0,
        }
    }
}

#[cfg(feature = "serde")]
impl BattleData {
    /// Deterministic binary encoding for save slots.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(|e| SnapshotError::Decode(e.to_string()))
    }
}

/// Why a snapshot could not be turned back into a battle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapshotError {
    #[error("snapshot is for enemy '{saved}', got '{supplied}'")]
    EnemyMismatch { saved: String, supplied: String },

    #[error("snapshot max health {saved} does not match enemy max health {actual}")]
    MaxHealthMismatch { saved: u32, actual: u32 },

    #[error("enemy health {health} is outside 1..={max}")]
    EnemyHealthOutOfRange { health: u32, max: u32 },

    #[error("player is defeated")]
    PlayerDefeated,

    #[error("saved turn order must list each side exactly once")]
    InvalidTurnOrder,

    #[error("turn position {position} is outside the round order")]
    InvalidTurnPosition { position: usize },

    #[error("round must be at least 1")]
    InvalidRound,

    #[error("failed to encode snapshot: {0}")]
    Encode(String),

    #[error("failed to decode snapshot: {0}")]
    Decode(String),
}

impl GameError for SnapshotError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Encode(_) => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EnemyMismatch { .. } => "SNAPSHOT_ENEMY_MISMATCH",
            Self::MaxHealthMismatch { .. } => "SNAPSHOT_MAX_HEALTH_MISMATCH",
            Self::EnemyHealthOutOfRange { .. } => "SNAPSHOT_ENEMY_HEALTH_OUT_OF_RANGE",
            Self::PlayerDefeated => "SNAPSHOT_PLAYER_DEFEATED",
            Self::InvalidTurnOrder => "SNAPSHOT_INVALID_TURN_ORDER",
            Self::InvalidTurnPosition { .. } => "SNAPSHOT_INVALID_TURN_POSITION",
            Self::InvalidRound => "SNAPSHOT_INVALID_ROUND",
            Self::Encode(_) => "SNAPSHOT_ENCODE",
            Self::Decode(_) => "SNAPSHOT_DECODE",
        }
    }
}
