//! Rating tables: typing speed/accuracy grades and their multipliers.
//!
//! Both tables are closed enumerations mapped through exhaustive matches, so a
//! new rating cannot be added without updating its multiplier.
//!
//! | Speed  | Mult | | Accuracy | Mult |
//! |--------|------|-|----------|------|
//! | Fast   | 2.0  | | Perfect  | 2.0  |
//! | Normal | 1.5  | | Good     | 1.0  |
//! | Slow   | 1.0  | | Poor     | 0.5  |
//! | Miss   | 0.0  | |          |      |

/// Exact fixed-point multiplier, stored in quarters (4 = ×1.0).
///
/// Every table entry is a multiple of 0.25, so integer quarters represent the
/// tables without floating point drift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Multiplier(u32);

impl Multiplier {
    /// Quarters per whole unit.
    pub const SCALE: u32 = 4;

    pub const ZERO: Self = Self(0);
    pub const HALF: Self = Self(2);
    pub const ONE: Self = Self(4);
    pub const ONE_AND_HALF: Self = Self(6);
    pub const TWO: Self = Self(8);

    /// Returns the multiplier in quarters.
    pub const fn quarters(self) -> u32 {
        self.0
    }

    /// Returns the multiplier as a float, for display only.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / f64::from(Self::SCALE)
    }
}

/// How quickly a typing attempt was completed relative to its time limit.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum SpeedRating {
    Fast,
    Normal,
    Slow,
    /// Timed out or never completed. Always worth nothing.
    Miss,
}

impl SpeedRating {
    pub const fn multiplier(self) -> Multiplier {
        match self {
            Self::Fast => Multiplier::TWO,
            Self::Normal => Multiplier::ONE_AND_HALF,
            Self::Slow => Multiplier::ONE,
            Self::Miss => Multiplier::ZERO,
        }
    }

    pub const fn is_miss(self) -> bool {
        matches!(self, Self::Miss)
    }
}

/// How closely the typed text matched the challenge word.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum AccuracyRating {
    Perfect,
    Good,
    Poor,
}

impl AccuracyRating {
    pub const fn multiplier(self) -> Multiplier {
        match self {
            Self::Perfect => Multiplier::TWO,
            Self::Good => Multiplier::ONE,
            Self::Poor => Multiplier::HALF,
        }
    }
}

/// Combined speed × accuracy scalar used to scale attack power.
///
/// Kept in sixteenths (quarters × quarters) so scaling stays integral.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RatingScalar(u32);

impl RatingScalar {
    /// Denominator of the scalar (4 × 4).
    pub const DENOMINATOR: u32 = Multiplier::SCALE * Multiplier::SCALE;

    /// Neutral scalar (×1.0) used for actions without a typing attempt.
    pub const NEUTRAL: Self = Self(Self::DENOMINATOR);

    pub const fn from_ratings(speed: SpeedRating, accuracy: AccuracyRating) -> Self {
        Self(speed.multiplier().quarters() * accuracy.multiplier().quarters())
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Scales a value, truncating toward zero.
    pub fn scale(self, value: u32) -> u32 {
        let scaled = u64::from(value) * u64::from(self.0) / u64::from(Self::DENOMINATOR);
        u32::try_from(scaled).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn speed_table_matches_published_values() {
        assert_eq!(SpeedRating::Fast.multiplier().as_f64(), 2.0);
        assert_eq!(SpeedRating::Normal.multiplier().as_f64(), 1.5);
        assert_eq!(SpeedRating::Slow.multiplier().as_f64(), 1.0);
        assert_eq!(SpeedRating::Miss.multiplier().as_f64(), 0.0);
    }

    #[test]
    fn accuracy_table_matches_published_values() {
        assert_eq!(AccuracyRating::Perfect.multiplier().as_f64(), 2.0);
        assert_eq!(AccuracyRating::Good.multiplier().as_f64(), 1.0);
        assert_eq!(AccuracyRating::Poor.multiplier().as_f64(), 0.5);
    }

    #[test]
    fn miss_zeroes_every_scalar() {
        for accuracy in AccuracyRating::iter() {
            let scalar = RatingScalar::from_ratings(SpeedRating::Miss, accuracy);
            assert!(scalar.is_zero());
            assert_eq!(scalar.scale(1_000), 0);
        }
    }

    #[test]
    fn scalar_truncates() {
        // 1.5 × 0.5 = 0.75; 7 × 0.75 = 5.25
        let scalar = RatingScalar::from_ratings(SpeedRating::Normal, AccuracyRating::Poor);
        assert_eq!(scalar.scale(7), 5);
        assert_eq!(RatingScalar::NEUTRAL.scale(7), 7);
    }

    #[test]
    fn ratings_parse_case_insensitively() {
        assert_eq!("fast".parse::<SpeedRating>().unwrap(), SpeedRating::Fast);
        assert_eq!("PERFECT".parse::<AccuracyRating>().unwrap(), AccuracyRating::Perfect);
        assert!("blazing".parse::<SpeedRating>().is_err());
    }
}
