/// Battle configuration constants and tunable parameters.
///
/// Runtime-tunable values are loaded from `config.toml` by the content crate;
/// missing keys fall back to [`BattleConfig::default`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Agility advantage over the enemy needed for each extra player action in a round.
    pub action_point_agility_step: u32,
    /// Upper bound on player actions per round.
    pub max_action_points: u32,
    /// Damage floor for any attempt that is not a Miss.
    pub minimum_damage: u32,
    /// Percentage of incoming damage removed while guarding.
    pub defend_reduction_percent: u32,
    /// Enemies at or below this percent of max health prefer healing skills.
    pub enemy_heal_threshold_percent: u32,
    /// Drop chance bonus per point of player fortune, in tenths of a percent.
    pub fortune_drop_bonus_per_mille: u32,
    /// Thresholds used to grade typing attempts.
    pub grading: GradingThresholds,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_SKILLS: usize = 8;
    pub const MAX_DROPS: usize = 8;
    pub const MAX_COMBATANTS: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ACTION_POINT_AGILITY_STEP: u32 = 10;
    pub const DEFAULT_MAX_ACTION_POINTS: u32 = 3;
    pub const DEFAULT_MINIMUM_DAMAGE: u32 = 1;
    pub const DEFAULT_DEFEND_REDUCTION_PERCENT: u32 = 50;
    pub const DEFAULT_ENEMY_HEAL_THRESHOLD_PERCENT: u32 = 30;
    pub const DEFAULT_FORTUNE_DROP_BONUS_PER_MILLE: u32 = 5;

    pub fn new() -> Self {
        Self {
            action_point_agility_step: Self::DEFAULT_ACTION_POINT_AGILITY_STEP,
            max_action_points: Self::DEFAULT_MAX_ACTION_POINTS,
            minimum_damage: Self::DEFAULT_MINIMUM_DAMAGE,
            defend_reduction_percent: Self::DEFAULT_DEFEND_REDUCTION_PERCENT,
            enemy_heal_threshold_percent: Self::DEFAULT_ENEMY_HEAL_THRESHOLD_PERCENT,
            fortune_drop_bonus_per_mille: Self::DEFAULT_FORTUNE_DROP_BONUS_PER_MILLE,
            grading: GradingThresholds::default(),
        }
    }

    /// Returns a copy with the action point curve replaced.
    pub fn with_action_points(mut self, agility_step: u32, max_points: u32) -> Self {
        self.action_point_agility_step = agility_step;
        self.max_action_points = max_points;
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Cut-offs for turning a raw typing attempt into speed/accuracy ratings.
///
/// Speed thresholds are percentages of the challenge time limit; accuracy is the
/// percentage of positionally matching characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GradingThresholds {
    pub fast_percent: u32,
    pub normal_percent: u32,
    pub good_accuracy_percent: u32,
}

impl Default for GradingThresholds {
    fn default() -> Self {
        Self {
            fast_percent: 40,
            normal_percent: 70,
            good_accuracy_percent: 80,
        }
    }
}
