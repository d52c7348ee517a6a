//! Data-driven battle content and loaders.
//!
//! This crate houses static content and provides loaders for RON/TOML data files:
//! - Enemy templates (stats, skills, drop tables) via RON
//! - Item catalogs (equipment with stat deltas) via RON
//! - Challenge word lists via RON
//! - Battle configuration via TOML
//!
//! Content is consumed when an encounter is built and never appears in battle
//! state. All loaders use battle-core types directly with serde.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{EnemyCatalog, ItemCatalog, WordList};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, EnemyLoader, ItemLoader, LoadResult, WordLoader};
