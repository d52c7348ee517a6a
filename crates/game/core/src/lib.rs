//! Deterministic battle rules for the typing RPG.
//!
//! `battle-core` turns typed-input performances into damage, mana costs and EX
//! points. It performs no I/O and holds no global state: randomness is injected
//! through [`rng::RngOracle`] and progression through
//! [`reward::ProgressionLedger`]. All combat mutation flows through
//! [`battle::Battle`], and the content and client crates depend on the types
//! re-exported here.
pub mod action;
pub mod battle;
pub mod combat;
pub mod combatant;
pub mod config;
pub mod error;
pub mod rating;
pub mod reward;
pub mod rng;
pub mod stats;
pub mod turn;
pub mod typing;

pub use action::{
    ActionEffect, ActionError, ActionOutcome, BattleAction, EnemyPolicy, ResolveContext,
    RuleBasedPolicy, resolve_action,
};
pub use battle::{
    Battle, BattleData, BattleError, BattleEvent, BattleOutcome, BattlePhase, BattleReport,
    BattleState, SnapshotError,
};
pub use combat::{apply_guard, calculate_damage};
pub use combatant::{
    CanAct, CanBeDamaged, Combatant, DropEntry, Enemy, EnemyTemplate, Equipment, EquipmentSlot,
    HasStats, Item, Player, ScalingStat, Side, Skill, SkillEffect,
};
pub use config::{BattleConfig, GradingThresholds};
pub use error::{ErrorSeverity, GameError};
pub use rating::{AccuracyRating, Multiplier, RatingScalar, SpeedRating};
pub use reward::{ExperienceLedger, ProgressionLedger, RewardResult, calculate_reward_points};
pub use rng::{FixedRng, PcgRng, RngOracle, compute_seed};
pub use stats::{ResourceMeter, StatBlock, StatDelta, StatKind, Vitals, effective_stats};
pub use turn::{TurnOrder, player_action_points};
pub use typing::{ChallengeError, Difficulty, TypingChallenge, TypingPerformance};
