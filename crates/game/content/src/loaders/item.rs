//! Item catalog loader.

use std::collections::HashSet;
use std::path::Path;

use crate::catalog::ItemCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing ItemCatalog
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate an item catalog. Item names must be unique.
    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for item in &catalog.items {
            anyhow::ensure!(!item.name.is_empty(), "Item with empty name");
            anyhow::ensure!(
                seen.insert(item.name.as_str()),
                "Duplicate item '{}'",
                item.name
            );
        }

        tracing::debug!(items = catalog.len(), "loaded item catalog");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::EquipmentSlot;

    #[test]
    fn omitted_deltas_are_zero() {
        let catalog = ItemLoader::parse(
            r#"(items: [
                (name: "keyboard", slot: Weapon, deltas: (strength: 3)),
                (name: "lanyard", slot: Accessory),
            ])"#,
        )
        .unwrap();

        let keyboard = catalog.find("keyboard").unwrap();
        assert_eq!(keyboard.slot, EquipmentSlot::Weapon);
        assert_eq!(keyboard.deltas.strength, 3);
        assert_eq!(keyboard.deltas.agility, 0);
        assert!(catalog.find("lanyard").unwrap().deltas.is_zero());
    }

    #[test]
    fn rejects_duplicates() {
        let err = ItemLoader::parse(
            r#"(items: [(name: "mouse", slot: Weapon), (name: "mouse", slot: Armor)])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate item 'mouse'"));
    }
}
