//! Combatants and their capabilities.
//!
//! A combatant is anything that satisfies the three capability traits:
//!
//! - [`HasStats`]: identity, base stats, and equipment deltas
//! - [`CanAct`]: which side it fights for and which skills it knows
//! - [`CanBeDamaged`]: current health/mana, always clamped to effective maximums
//!
//! [`Player`] and [`Enemy`] are the two variants. Only the player carries
//! equipment; only the enemy carries drops.

pub mod enemy;
pub mod equipment;
pub mod player;
pub mod skill;

pub use enemy::{DropEntry, Enemy, EnemyTemplate};
pub use equipment::{Equipment, EquipmentSlot, Item};
pub use player::Player;
pub use skill::{ScalingStat, Skill, SkillEffect};

use crate::action::ActionError;
use crate::stats::{self, ResourceMeter, StatBlock, StatDelta, Vitals};

/// Which side of the battle a combatant fights for.
///
/// Ordering puts the player first; the turn arbiter relies on it for ties.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }

    /// Stable small integer used when mixing RNG seeds.
    pub const fn index(self) -> u32 {
        match self {
            Self::Player => 0,
            Self::Enemy => 1,
        }
    }
}

/// Identity and stat access.
pub trait HasStats {
    fn name(&self) -> &str;

    fn level(&self) -> u32;

    fn base_stats(&self) -> &StatBlock;

    /// Sum of all active stat deltas. Combatants without equipment have none.
    fn stat_deltas(&self) -> StatDelta {
        StatDelta::ZERO
    }

    /// Base stats plus active deltas, recomputed on every call.
    fn effective_stats(&self) -> StatBlock {
        stats::effective_stats(self)
    }
}

/// Side membership and known skills.
pub trait CanAct: HasStats {
    fn side(&self) -> Side;

    fn skills(&self) -> &[Skill];

    fn skill(&self, index: usize) -> Option<&Skill> {
        self.skills().get(index)
    }
}

/// Health and mana pools.
///
/// Stored vitals are only ever read through [`ResourceMeter`]s built against the
/// current effective maximums, which keeps `0 ≤ current ≤ max` even after an
/// equipment change lowers a maximum.
pub trait CanBeDamaged: HasStats {
    fn vitals(&self) -> Vitals;

    fn vitals_mut(&mut self) -> &mut Vitals;

    fn health(&self) -> ResourceMeter {
        ResourceMeter::new(self.vitals().health, self.effective_stats().max_health)
    }

    fn mana(&self) -> ResourceMeter {
        ResourceMeter::new(self.vitals().mana, self.effective_stats().max_mana)
    }

    fn is_defeated(&self) -> bool {
        self.health().is_depleted()
    }

    /// Applies damage, returning the amount actually removed.
    fn take_damage(&mut self, amount: u32) -> u32 {
        let mut meter = self.health();
        let removed = meter.drain(amount);
        self.vitals_mut().health = meter.current();
        removed
    }

    /// Restores health, returning the amount actually added.
    fn heal(&mut self, amount: u32) -> u32 {
        let mut meter = self.health();
        let added = meter.restore(amount);
        self.vitals_mut().health = meter.current();
        added
    }

    /// Spends mana, or rejects without mutation when the pool is too low.
    fn spend_mana(&mut self, cost: u32) -> Result<(), ActionError> {
        let mut meter = self.mana();
        if !meter.try_spend(cost) {
            return Err(ActionError::InsufficientMana {
                required: cost,
                available: meter.current(),
            });
        }
        self.vitals_mut().mana = meter.current();
        Ok(())
    }

    /// Writes the clamped meter values back into stored vitals.
    fn clamp_vitals(&mut self) {
        let vitals = Vitals::new(self.health().current(), self.mana().current());
        *self.vitals_mut() = vitals;
    }
}

/// Anything that can take part in a battle.
pub trait Combatant: CanAct + CanBeDamaged {}

impl<T: CanAct + CanBeDamaged + ?Sized> Combatant for T {}
