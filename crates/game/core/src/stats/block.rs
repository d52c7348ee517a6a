//! Stat blocks - the base attributes every combatant carries.
//!
//! Base stats are the Single Source of Truth and the only stats that are stored.
//! Effective stats are never stored; see [`super::aggregate`].

/// One stat dimension.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    MaxHealth,
    MaxMana,
    /// Physical attack.
    Strength,
    /// Magic power and defense.
    Willpower,
    /// Turn speed.
    Agility,
    /// Critical and evasion luck; also improves drop odds.
    Fortune,
}

impl StatKind {
    /// Clamping bounds for this dimension.
    pub const fn bounds(self) -> StatBounds {
        match self {
            Self::MaxHealth | Self::MaxMana => StatBounds::RESOURCE_MAXIMUMS,
            Self::Strength | Self::Willpower | Self::Agility | Self::Fortune => {
                StatBounds::ATTRIBUTES
            }
        }
    }
}

/// Bounds configuration for a stat dimension.
///
/// - **Attributes**: [0, 9999] - a cursed item may zero a stat but never underflow it
/// - **Resource maximums**: [1, 99999] - max health/mana never collapses to 0
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatBounds {
    pub min: u32,
    pub max: u32,
}

impl StatBounds {
    pub const ATTRIBUTES: Self = Self { min: 0, max: 9999 };
    pub const RESOURCE_MAXIMUMS: Self = Self { min: 1, max: 99999 };

    /// Applies a signed delta to a base value and clamps the result.
    pub fn apply(self, base: u32, delta: i32) -> u32 {
        let raw = i64::from(base) + i64::from(delta);
        raw.clamp(i64::from(self.min), i64::from(self.max)) as u32
    }
}

/// Base (or effective) stats of a combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    pub max_health: u32,
    pub max_mana: u32,
    pub strength: u32,
    pub willpower: u32,
    pub agility: u32,
    pub fortune: u32,
}

impl StatBlock {
    pub const fn new(
        max_health: u32,
        max_mana: u32,
        strength: u32,
        willpower: u32,
        agility: u32,
        fortune: u32,
    ) -> Self {
        Self {
            max_health,
            max_mana,
            strength,
            willpower,
            agility,
            fortune,
        }
    }

    pub const fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::MaxHealth => self.max_health,
            StatKind::MaxMana => self.max_mana,
            StatKind::Strength => self.strength,
            StatKind::Willpower => self.willpower,
            StatKind::Agility => self.agility,
            StatKind::Fortune => self.fortune,
        }
    }

    pub fn set(&mut self, kind: StatKind, value: u32) {
        match kind {
            StatKind::MaxHealth => self.max_health = value,
            StatKind::MaxMana => self.max_mana = value,
            StatKind::Strength => self.strength = value,
            StatKind::Willpower => self.willpower = value,
            StatKind::Agility => self.agility = value,
            StatKind::Fortune => self.fortune = value,
        }
    }

    /// Effective defense against incoming damage.
    pub const fn defense(&self) -> u32 {
        self.willpower
    }
}

impl Default for StatBlock {
    /// A level 1 adventurer: 100 HP, 30 MP, 10 in every attribute.
    fn default() -> Self {
        Self::new(100, 30, 10, 10, 10, 10)
    }
}
