//! Content factory for loading every catalog from one data directory.

use std::path::{Path, PathBuf};

use battle_core::{BattleConfig, Enemy};

use crate::catalog::{EnemyCatalog, ItemCatalog, WordList};
use crate::loaders::{ConfigLoader, EnemyLoader, ItemLoader, LoadResult, WordLoader};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── enemies.ron
/// ├── items.ron
/// └── words.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration; a malformed one is an
    /// error.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config.toml, using defaults");
            return Ok(BattleConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load enemy catalog from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<EnemyCatalog> {
        EnemyLoader::load(&self.data_dir.join("enemies.ron"))
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load challenge words from `words.ron`.
    pub fn load_words(&self) -> LoadResult<WordList> {
        WordLoader::load(&self.data_dir.join("words.ron"))
    }

    /// Loads the enemy catalog and spawns `name` from it.
    pub fn spawn_enemy(&self, name: &str) -> LoadResult<Enemy> {
        let catalog = self.load_enemies()?;
        catalog.spawn(name).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown enemy '{}' (known: {})",
                name,
                catalog.names().collect::<Vec<_>>().join(", ")
            )
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::CanBeDamaged;

    const ENEMIES: &str = r#"(enemies: [
        (name: "orphan", level: 1, stats: (max_health: 20, max_mana: 0, strength: 4, willpower: 2, agility: 3, fortune: 0)),
    ])"#;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_config_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), BattleConfig::default());
    }

    #[test]
    fn missing_catalog_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentFactory::new(dir.path()).load_items().unwrap_err();
        assert!(err.to_string().contains("items.ron"));
    }

    #[test]
    fn spawns_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("enemies.ron"), ENEMIES).unwrap();
        let factory = ContentFactory::new(dir.path());

        let orphan = factory.spawn_enemy("orphan").unwrap();
        assert_eq!(orphan.health().current(), 20);

        let err = factory.spawn_enemy("daemon").unwrap_err();
        assert!(err.to_string().contains("known: orphan"));
    }
}
