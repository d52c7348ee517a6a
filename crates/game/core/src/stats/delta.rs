//! Flat stat deltas contributed by equipment.
//!
//! Deltas are value objects: they sum per dimension and are applied to a base
//! [`StatBlock`] in one step, clamped to each dimension's [`StatBounds`].
//!
//! [`StatBounds`]: super::StatBounds

use core::iter::Sum;
use core::ops::{Add, AddAssign};

use strum::IntoEnumIterator;

use super::block::{StatBlock, StatKind};

/// Signed per-stat adjustments. Omitted dimensions are zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatDelta {
    pub max_health: i32,
    pub max_mana: i32,
    pub strength: i32,
    pub willpower: i32,
    pub agility: i32,
    pub fortune: i32,
}

impl StatDelta {
    pub const ZERO: Self = Self {
        max_health: 0,
        max_mana: 0,
        strength: 0,
        willpower: 0,
        agility: 0,
        fortune: 0,
    };

    /// A delta touching a single dimension.
    pub fn single(kind: StatKind, value: i32) -> Self {
        Self::ZERO.with(kind, value)
    }

    /// Sets one dimension (builder pattern).
    pub fn with(mut self, kind: StatKind, value: i32) -> Self {
        *self.get_mut(kind) = value;
        self
    }

    pub const fn get(&self, kind: StatKind) -> i32 {
        match kind {
            StatKind::MaxHealth => self.max_health,
            StatKind::MaxMana => self.max_mana,
            StatKind::Strength => self.strength,
            StatKind::Willpower => self.willpower,
            StatKind::Agility => self.agility,
            StatKind::Fortune => self.fortune,
        }
    }

    fn get_mut(&mut self, kind: StatKind) -> &mut i32 {
        match kind {
            StatKind::MaxHealth => &mut self.max_health,
            StatKind::MaxMana => &mut self.max_mana,
            StatKind::Strength => &mut self.strength,
            StatKind::Willpower => &mut self.willpower,
            StatKind::Agility => &mut self.agility,
            StatKind::Fortune => &mut self.fortune,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Applies this delta to a base block, clamping each dimension independently.
    pub fn apply(&self, base: &StatBlock) -> StatBlock {
        let mut out = *base;
        for kind in StatKind::iter() {
            out.set(kind, kind.bounds().apply(base.get(kind), self.get(kind)));
        }
        out
    }
}

impl Add for StatDelta {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for StatDelta {
    fn add_assign(&mut self, rhs: Self) {
        for kind in StatKind::iter() {
            let slot = self.get_mut(kind);
            *slot = slot.saturating_add(rhs.get(kind));
        }
    }
}

impl Sum for StatDelta {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a StatDelta> for StatDelta {
    fn sum<I: Iterator<Item = &'a StatDelta>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
