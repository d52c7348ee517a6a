//! Battle actions and their resolution.
//!
//! - [`BattleAction`]: the intent submitted for one turn
//! - [`resolve_action`]: applies an intent to an actor/target pair
//! - [`EnemyPolicy`]: deterministic rule-based selection for enemy turns

mod error;
mod policy;
mod resolve;

pub use error::ActionError;
pub use policy::{EnemyPolicy, RuleBasedPolicy};
pub use resolve::{ResolveContext, resolve_action};

use crate::combatant::Side;
use crate::reward::RewardResult;
use crate::typing::TypingPerformance;

/// An already-parsed action intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleAction {
    /// Basic strength-scaled attack.
    Attack,
    /// Use the skill at this index of the actor's skill list.
    Skill(usize),
    /// Guard: the next hit taken before the actor's next turn is reduced.
    Defend,
    /// Leave the battle. Player only, on the player's own turn.
    Flee,
}

impl BattleAction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Skill(_) => "skill",
            Self::Defend => "defend",
            Self::Flee => "flee",
        }
    }
}

/// What an action did once resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionEffect {
    Damage { amount: u32 },
    Heal { amount: u32 },
    Drain { damage: u32, healed: u32 },
    /// A Miss: the turn is spent, nothing lands.
    Missed,
    Guard,
    Fled,
}

/// Result of a resolved action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    pub actor: Side,
    pub target: Side,
    pub action: BattleAction,
    pub effect: ActionEffect,
    pub mana_spent: u32,
    /// EX points earned; always zero for enemy actions.
    pub reward: RewardResult,
    pub performance: Option<TypingPerformance>,
    /// The hit was reduced by the target's guard, which is now used up.
    pub guard_consumed: bool,
    pub target_defeated: bool,
}
