//! EX point rewards for typing-based attacks.
//!
//! ```text
//! points = floor(difficulty × speed_mult × accuracy_mult)
//! ```
//!
//! Multipliers are exact quarters, so the product is computed in integers and
//! truncated once. A Miss is worth nothing because its table entry is zero.

use crate::rating::{AccuracyRating, Multiplier, SpeedRating};
use crate::typing::{Difficulty, TypingPerformance};

/// Points earned by one action. Immutable once computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardResult {
    points: u32,
}

impl RewardResult {
    pub const NONE: Self = Self { points: 0 };

    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Computes the reward for a typing performance.
    pub fn for_performance(performance: &TypingPerformance) -> Self {
        Self {
            points: calculate_reward_points(
                performance.difficulty,
                performance.speed,
                performance.accuracy,
            ),
        }
    }
}

/// Calculates EX points for a typed attempt.
///
/// Pure and referentially transparent.
///
/// # Examples
///
/// ```
/// # use battle_core::reward::calculate_reward_points;
/// # use battle_core::{AccuracyRating, Difficulty, SpeedRating};
/// let d = Difficulty::new(5).unwrap();
/// assert_eq!(calculate_reward_points(d, SpeedRating::Fast, AccuracyRating::Perfect), 20);
/// assert_eq!(calculate_reward_points(d, SpeedRating::Slow, AccuracyRating::Poor), 2);
/// ```
pub fn calculate_reward_points(
    difficulty: Difficulty,
    speed: SpeedRating,
    accuracy: AccuracyRating,
) -> u32 {
    const DENOMINATOR: u64 = (Multiplier::SCALE * Multiplier::SCALE) as u64;

    let numerator = u64::from(difficulty.get())
        * u64::from(speed.multiplier().quarters())
        * u64::from(accuracy.multiplier().quarters());

    u32::try_from(numerator / DENOMINATOR).unwrap_or(u32::MAX)
}

/// Receives reward points as plain integers.
///
/// Leveling thresholds belong to the implementor; the battle engine only
/// reports what was earned.
pub trait ProgressionLedger {
    fn record_points(&mut self, points: u32);
}

/// Accumulating ledger that keeps a running EX total.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperienceLedger {
    total: u64,
    entries: u32,
}

impl ExperienceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of times points were recorded (zero-point entries included).
    pub fn entries(&self) -> u32 {
        self.entries
    }
}

impl ProgressionLedger for ExperienceLedger {
    fn record_points(&mut self, points: u32) {
        self.total = self.total.saturating_add(u64::from(points));
        self.entries = self.entries.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn d(value: u32) -> Difficulty {
        Difficulty::new(value).unwrap()
    }

    #[test]
    fn published_scenarios() {
        assert_eq!(
            calculate_reward_points(d(5), SpeedRating::Fast, AccuracyRating::Perfect),
            20
        );
        // 3 × 1.5 × 1.0 = 4.5
        assert_eq!(
            calculate_reward_points(d(3), SpeedRating::Normal, AccuracyRating::Good),
            4
        );
        // 5 × 1.0 × 0.5 = 2.5
        assert_eq!(
            calculate_reward_points(d(5), SpeedRating::Slow, AccuracyRating::Poor),
            2
        );
    }

    #[test]
    fn matches_float_formula_for_all_ratings() {
        for difficulty in 1..=200 {
            for speed in SpeedRating::iter() {
                for accuracy in AccuracyRating::iter() {
                    let expected = (f64::from(difficulty)
                        * speed.multiplier().as_f64()
                        * accuracy.multiplier().as_f64())
                    .floor() as u32;
                    assert_eq!(
                        calculate_reward_points(d(difficulty), speed, accuracy),
                        expected,
                        "d={difficulty} {speed} {accuracy}"
                    );
                }
            }
        }
    }

    #[test]
    fn miss_is_always_zero() {
        for accuracy in AccuracyRating::iter() {
            for difficulty in [1, 7, 1_000, u32::MAX] {
                assert_eq!(
                    calculate_reward_points(d(difficulty), SpeedRating::Miss, accuracy),
                    0
                );
            }
        }
    }

    #[test]
    fn large_difficulty_saturates() {
        assert_eq!(
            calculate_reward_points(d(u32::MAX), SpeedRating::Fast, AccuracyRating::Perfect),
            u32::MAX
        );
    }

    #[test]
    fn ledger_accumulates() {
        let mut ledger = ExperienceLedger::new();
        ledger.record_points(20);
        ledger.record_points(0);
        ledger.record_points(4);
        assert_eq!(ledger.total(), 24);
        assert_eq!(ledger.entries(), 3);
    }
}
