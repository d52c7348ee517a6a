//! Resource pools (health, mana).
//!
//! Resource pools are partially stored:
//! - Maximum values: effective stats (NOT stored, equipment may change them)
//! - Current values: battle state (MUST be stored)
//!
//! A [`ResourceMeter`] pairs the two and enforces `0 ≤ current ≤ maximum`.

/// Current resource values (persisted per combatant).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vitals {
    pub health: u32,
    pub mana: u32,
}

impl Vitals {
    pub const fn new(health: u32, mana: u32) -> Self {
        Self { health, mana }
    }
}

/// Integer resource meter tracked per combatant.
///
/// Construction clamps `current` into `[0, maximum]`, so a meter read after an
/// equipment change that lowered the maximum is still valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    current: u32,
    maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub const fn current(&self) -> u32 {
        self.current
    }

    pub const fn maximum(&self) -> u32 {
        self.maximum
    }

    pub const fn is_depleted(&self) -> bool {
        self.current == 0
    }

    pub const fn is_full(&self) -> bool {
        self.current == self.maximum
    }

    /// Current value as a percentage of maximum (0 when maximum is 0).
    pub fn percent(&self) -> u32 {
        if self.maximum == 0 {
            return 0;
        }
        (u64::from(self.current) * 100 / u64::from(self.maximum)) as u32
    }

    /// Removes up to `amount`, returning how much was actually removed.
    pub fn drain(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.current);
        self.current -= removed;
        removed
    }

    /// Adds up to `amount` without exceeding maximum, returning how much was added.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let added = amount.min(self.maximum - self.current);
        self.current += added;
        added
    }

    /// Spends exactly `cost`, or nothing when the pool is too low.
    pub fn try_spend(&mut self, cost: u32) -> bool {
        if cost > self.current {
            return false;
        }
        self.current -= cost;
        true
    }
}
