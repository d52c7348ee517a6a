//! In-memory content catalogs.
//!
//! Catalogs are plain lookup tables. They are built by the loaders from data
//! files, or by hand in tests, and are consumed when an encounter needs an
//! [`Enemy`] or the player needs gear.

use battle_core::{Enemy, EnemyTemplate, EquipmentSlot, Item};

/// Enemy templates keyed by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyCatalog {
    pub enemies: Vec<EnemyTemplate>,
}

impl EnemyCatalog {
    pub fn new(enemies: Vec<EnemyTemplate>) -> Self {
        Self { enemies }
    }

    pub fn find(&self, name: &str) -> Option<&EnemyTemplate> {
        self.enemies.iter().find(|template| template.name == name)
    }

    /// Builds a fresh enemy at full health, or `None` for an unknown name.
    pub fn spawn(&self, name: &str) -> Option<Enemy> {
        self.find(name).map(EnemyTemplate::spawn)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.enemies.iter().map(|template| template.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }
}

/// Equippable items keyed by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemCatalog {
    pub items: Vec<Item>,
}

impl ItemCatalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// First listed item for `slot`, used to outfit a starting character.
    pub fn first_for_slot(&self, slot: EquipmentSlot) -> Option<&Item> {
        self.items.iter().find(|item| item.slot == slot)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Words handed out as typing challenges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordList {
    pub words: Vec<String>,
}

impl WordList {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Picks a word by index, wrapping around the list.
    pub fn pick(&self, index: u32) -> Option<&str> {
        if self.words.is_empty() {
            return None;
        }
        let position = index as usize % self.words.len();
        self.words.get(position).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
