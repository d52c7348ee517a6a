//! Enemy catalog loader.

use std::collections::HashSet;
use std::path::Path;

use battle_core::{BattleConfig, EnemyTemplate};

use crate::catalog::EnemyCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for enemy templates from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    /// Load enemy catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing EnemyCatalog
    pub fn load(path: &Path) -> LoadResult<EnemyCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| e.context(format!("in {}", path.display())))
    }

    pub fn parse(content: &str) -> LoadResult<EnemyCatalog> {
        let catalog: EnemyCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for template in &catalog.enemies {
            Self::validate(template)?;
            anyhow::ensure!(
                seen.insert(template.name.as_str()),
                "Duplicate enemy '{}'",
                template.name
            );
        }

        tracing::debug!(enemies = catalog.len(), "loaded enemy catalog");
        Ok(catalog)
    }

    fn validate(template: &EnemyTemplate) -> LoadResult<()> {
        anyhow::ensure!(!template.name.is_empty(), "Enemy with empty name");
        anyhow::ensure!(
            template.stats.max_health > 0,
            "Enemy '{}' has zero max_health",
            template.name
        );
        anyhow::ensure!(
            template.skills.len() <= BattleConfig::MAX_SKILLS,
            "Enemy '{}' has {} skills (max {})",
            template.name,
            template.skills.len(),
            BattleConfig::MAX_SKILLS
        );
        anyhow::ensure!(
            template.drops.len() <= BattleConfig::MAX_DROPS,
            "Enemy '{}' has {} drops (max {})",
            template.name,
            template.drops.len(),
            BattleConfig::MAX_DROPS
        );
        for drop in &template.drops {
            anyhow::ensure!(
                drop.chance_percent <= 100,
                "Enemy '{}' drop '{}' has chance {}% (max 100)",
                template.name,
                drop.item,
                drop.chance_percent
            );
        }
        Ok(())
    }
}
