//! Battle configuration loader.

use std::path::Path;

use battle_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`BattleConfig::default`].
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &BattleConfig) -> LoadResult<()> {
        anyhow::ensure!(
            config.action_point_agility_step > 0,
            "action_point_agility_step must be positive"
        );
        anyhow::ensure!(
            config.max_action_points > 0,
            "max_action_points must be at least 1"
        );
        anyhow::ensure!(
            config.minimum_damage >= 1,
            "minimum_damage must be at least 1"
        );
        anyhow::ensure!(
            config.defend_reduction_percent <= 100,
            "defend_reduction_percent must be at most 100"
        );

        let grading = &config.grading;
        anyhow::ensure!(
            grading.fast_percent <= grading.normal_percent && grading.normal_percent <= 100,
            "grading thresholds must satisfy fast_percent <= normal_percent <= 100"
        );
        anyhow::ensure!(
            grading.good_accuracy_percent <= 100,
            "good_accuracy_percent must be at most 100"
        );
        Ok(())
    }
}
