//! Common error infrastructure for battle-core.
//!
//! Domain-specific errors (`ActionError`, `BattleError`, `SnapshotError`,
//! `ChallengeError`) live next to the operations they reject. Every one of them
//! is a local, recoverable report to the caller: a rejected operation never
//! mutates battle state.
//!
//! # Taxonomy
//!
//! - **Invalid transition**: operation called in a phase that forbids it
//! - **Invalid actor/turn**: action submitted by a combatant that is not on turn
//! - **Insufficient resource**: action costs more mana than available
//! - **Invalid target**: acting on (or as) a defeated combatant

/// How a caller should treat a rejected operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Same battle, different choice: pick another action or wait for the turn.
    Recoverable,
    /// The input itself is wrong (bad skill index, malformed save) and retrying
    /// it unchanged fails again.
    Validation,
    /// Engine-side failure such as a snapshot that cannot be encoded.
    Internal,
}

impl ErrorSeverity {
    pub const fn is_recoverable(self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Shared classification for battle-core errors.
///
/// Implemented by every error enum in the crate; `error_code` gives log lines
/// and tests a stable identifier that survives message rewording.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
