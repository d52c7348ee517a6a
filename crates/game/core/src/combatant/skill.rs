//! Skills: named actions with a mana cost and an effect.

use crate::stats::StatBlock;

/// Stat a damaging skill scales with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalingStat {
    Strength,
    Willpower,
}

impl ScalingStat {
    pub const fn of(self, stats: &StatBlock) -> u32 {
        match self {
            Self::Strength => stats.strength,
            Self::Willpower => stats.willpower,
        }
    }
}

/// What a skill does when it resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillEffect {
    /// Damage the opponent: `(scaling stat + power) × rating − defense`.
    Damage { power: u32, scaling: ScalingStat },
    /// Restore the caster's health.
    Heal { amount: u32 },
    /// Willpower-scaled damage; half of the damage dealt heals the caster.
    Drain { power: u32 },
}

impl SkillEffect {
    pub const fn is_heal(&self) -> bool {
        matches!(self, Self::Heal { .. })
    }

    /// Raw power of a damaging effect, `None` for heals.
    pub const fn damage_power(&self) -> Option<u32> {
        match self {
            Self::Damage { power, .. } | Self::Drain { power } => Some(*power),
            Self::Heal { .. } => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mana_cost: u32,
    pub effect: SkillEffect,
}

impl Skill {
    pub fn new(name: impl Into<String>, mana_cost: u32, effect: SkillEffect) -> Self {
        Self {
            name: name.into(),
            mana_cost,
            effect,
        }
    }

    pub fn damage(name: impl Into<String>, mana_cost: u32, power: u32, scaling: ScalingStat) -> Self {
        Self::new(name, mana_cost, SkillEffect::Damage { power, scaling })
    }

    pub fn heal(name: impl Into<String>, mana_cost: u32, amount: u32) -> Self {
        Self::new(name, mana_cost, SkillEffect::Heal { amount })
    }

    pub fn drain(name: impl Into<String>, mana_cost: u32, power: u32) -> Self {
        Self::new(name, mana_cost, SkillEffect::Drain { power })
    }
}
