//! Damage calculation.

use crate::rating::RatingScalar;

/// Calculate damage from an attack or damaging skill.
///
/// # Formula
///
/// ```text
/// if scalar == 0: 0                                  (Miss)
/// raw   = (attack_stat + power) × scalar
/// final = max(raw − defense, minimum, 1)
/// ```
///
/// # Arguments
///
/// * `attack_stat` - Attacker's effective scaling stat (strength or willpower)
/// * `power` - Extra power from the skill (0 for a basic attack)
/// * `scalar` - Typing rating scalar; neutral for enemy actions
/// * `defense` - Defender's effective defense (willpower)
/// * `minimum` - Floor for any non-Miss attempt; never below 1
pub fn calculate_damage(
    attack_stat: u32,
    power: u32,
    scalar: RatingScalar,
    defense: u32,
    minimum: u32,
) -> u32 {
    if scalar.is_zero() {
        return 0;
    }
    let raw = scalar.scale(attack_stat.saturating_add(power));
    raw.saturating_sub(defense).max(minimum.max(1))
}

/// Reduce damage against a guarding defender.
///
/// The floor still applies, so a guarded non-Miss hit lands for at least
/// `minimum`, and never for less than 1.
pub fn apply_guard(damage: u32, reduction_percent: u32, minimum: u32) -> u32 {
    if damage == 0 {
        return 0;
    }
    let reduction = u64::from(damage) * u64::from(reduction_percent.min(100)) / 100;
    (damage - reduction as u32).max(minimum.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::{AccuracyRating, SpeedRating};

    #[test]
    fn perfect_fast_attack_quadruples_then_subtracts_defense() {
        let scalar = RatingScalar::from_ratings(SpeedRating::Fast, AccuracyRating::Perfect);
        assert_eq!(calculate_damage(10, 0, scalar, 5, 1), 35);
    }

    #[test]
    fn neutral_scalar_for_enemy_hits() {
        assert_eq!(calculate_damage(8, 4, RatingScalar::NEUTRAL, 10, 1), 2);
    }

    #[test]
    fn floors_non_miss_attempts() {
        let scalar = RatingScalar::from_ratings(SpeedRating::Slow, AccuracyRating::Poor);
        assert_eq!(calculate_damage(4, 0, scalar, 50, 1), 1);
    }

    #[test]
    fn miss_deals_nothing() {
        let scalar = RatingScalar::from_ratings(SpeedRating::Miss, AccuracyRating::Perfect);
        assert_eq!(calculate_damage(99, 99, scalar, 0, 1), 0);
    }

    #[test]
    fn guard_halves_but_respects_floor() {
        assert_eq!(apply_guard(21, 50, 1), 11);
        assert_eq!(apply_guard(1, 50, 1), 1);
        assert_eq!(apply_guard(0, 50, 1), 0);
        assert_eq!(apply_guard(40, 250, 1), 1);
    }

    #[test]
    fn zero_minimum_still_lands_one_point() {
        let scalar = RatingScalar::from_ratings(SpeedRating::Slow, AccuracyRating::Poor);
        assert_eq!(calculate_damage(4, 0, scalar, 99, 0), 1);
        assert_eq!(apply_guard(1, 100, 0), 1);
    }
}
