//! Typing performance and challenge grading.
//!
//! A [`TypingPerformance`] is the only thing the battle engine needs from the
//! input layer. [`TypingChallenge`] is the word the player was asked to type; it
//! is also the `currentChallenge` saved with a mid-battle snapshot.

use core::num::NonZeroU32;

use crate::config::GradingThresholds;
use crate::error::{ErrorSeverity, GameError};
use crate::rating::{AccuracyRating, RatingScalar, SpeedRating};

/// Typing difficulty, always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct Difficulty(NonZeroU32);

impl Difficulty {
    pub const MIN: Self = Self(NonZeroU32::MIN);

    /// Returns `None` for zero.
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Default difficulty for a word: one point per three characters, at least 1.
    pub fn for_word(word: &str) -> Self {
        Self::new(word.chars().count() as u32 / 3).unwrap_or(Self::MIN)
    }
}

impl TryFrom<u32> for Difficulty {
    type Error = ChallengeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ChallengeError::ZeroDifficulty)
    }
}

impl From<Difficulty> for u32 {
    fn from(value: Difficulty) -> Self {
        value.get()
    }
}

/// Result of one typed attempt, consumed read-only by the action resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypingPerformance {
    pub speed: SpeedRating,
    pub accuracy: AccuracyRating,
    pub difficulty: Difficulty,
}

impl TypingPerformance {
    pub const fn new(speed: SpeedRating, accuracy: AccuracyRating, difficulty: Difficulty) -> Self {
        Self {
            speed,
            accuracy,
            difficulty,
        }
    }

    /// A forced miss, e.g. when the input layer times out.
    pub const fn missed(difficulty: Difficulty) -> Self {
        Self::new(SpeedRating::Miss, AccuracyRating::Poor, difficulty)
    }

    pub const fn is_miss(&self) -> bool {
        self.speed.is_miss()
    }

    pub const fn scalar(&self) -> RatingScalar {
        RatingScalar::from_ratings(self.speed, self.accuracy)
    }
}

/// Errors raised when building a challenge.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChallengeError {
    #[error("challenge word is empty")]
    EmptyWord,

    #[error("challenge time limit must be positive")]
    ZeroTimeLimit,

    #[error("difficulty must be at least 1")]
    ZeroDifficulty,
}

impl GameError for ChallengeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyWord => "CHALLENGE_EMPTY_WORD",
            Self::ZeroTimeLimit => "CHALLENGE_ZERO_TIME_LIMIT",
            Self::ZeroDifficulty => "CHALLENGE_ZERO_DIFFICULTY",
        }
    }
}

/// A word to type within a time limit.
///
/// Serialized as `{ word, timeLimit, difficulty }`, the save-file shape of
/// `currentChallenge`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "camelCase", try_from = "RawChallenge")
)]
pub struct TypingChallenge {
    word: String,
    /// Time limit in milliseconds.
    time_limit: u64,
    difficulty: Difficulty,
}

/// Unchecked wire form of [`TypingChallenge`]; decoding goes through
/// [`TypingChallenge::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawChallenge {
    word: String,
    time_limit: u64,
    difficulty: Difficulty,
}

#[cfg(feature = "serde")]
impl TryFrom<RawChallenge> for TypingChallenge {
    type Error = ChallengeError;

    fn try_from(raw: RawChallenge) -> Result<Self, Self::Error> {
        Self::new(raw.word, raw.time_limit, raw.difficulty)
    }
}

impl TypingChallenge {
    pub fn new(
        word: impl Into<String>,
        time_limit_ms: u64,
        difficulty: Difficulty,
    ) -> Result<Self, ChallengeError> {
        let word = word.into();
        if word.is_empty() {
            return Err(ChallengeError::EmptyWord);
        }
        if time_limit_ms == 0 {
            return Err(ChallengeError::ZeroTimeLimit);
        }
        Ok(Self {
            word,
            time_limit: time_limit_ms,
            difficulty,
        })
    }

    /// Builds a challenge whose difficulty follows [`Difficulty::for_word`].
    pub fn for_word(word: impl Into<String>, time_limit_ms: u64) -> Result<Self, ChallengeError> {
        let word = word.into();
        let difficulty = Difficulty::for_word(&word);
        Self::new(word, time_limit_ms, difficulty)
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn time_limit_ms(&self) -> u64 {
        self.time_limit
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Grades a finished attempt.
    ///
    /// Speed: over the limit is a Miss, otherwise the elapsed share of the limit
    /// picks Fast / Normal / Slow. Accuracy: exact match is Perfect, otherwise the
    /// share of positionally matching characters picks Good / Poor.
    pub fn grade(
        &self,
        typed: &str,
        elapsed_ms: u64,
        thresholds: &GradingThresholds,
    ) -> TypingPerformance {
        let speed = self.grade_speed(elapsed_ms, thresholds);
        let accuracy = self.grade_accuracy(typed, thresholds);
        TypingPerformance::new(speed, accuracy, self.difficulty)
    }

    fn grade_speed(&self, elapsed_ms: u64, thresholds: &GradingThresholds) -> SpeedRating {
        if self.time_limit == 0 || elapsed_ms > self.time_limit {
            return SpeedRating::Miss;
        }
        let percent = elapsed_ms.saturating_mul(100) / self.time_limit;
        if percent <= u64::from(thresholds.fast_percent) {
            SpeedRating::Fast
        } else if percent <= u64::from(thresholds.normal_percent) {
            SpeedRating::Normal
        } else {
            SpeedRating::Slow
        }
    }

    fn grade_accuracy(&self, typed: &str, thresholds: &GradingThresholds) -> AccuracyRating {
        if typed == self.word {
            return AccuracyRating::Perfect;
        }
        let expected_len = self.word.chars().count();
        let typed_len = typed.chars().count();
        let matched = self
            .word
            .chars()
            .zip(typed.chars())
            .filter(|(expected, actual)| expected == actual)
            .count();

        // Extra characters count against the attempt as much as missing ones.
        let denominator = expected_len.max(typed_len);
        let percent = matched * 100 / denominator;
        if percent >= thresholds.good_accuracy_percent as usize {
            AccuracyRating::Good
        } else {
            AccuracyRating::Poor
        }
    }
}
