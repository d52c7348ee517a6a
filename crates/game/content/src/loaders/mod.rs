//! Content loaders for reading battle data from files.
//!
//! Enemy, item and word catalogs are RON; engine configuration is TOML. Every
//! loader parses into `battle-core` types (or the catalogs in
//! [`crate::catalog`]) and validates what serde cannot express.

pub mod config;
pub mod enemies;
pub mod factory;
pub mod item;
pub mod words;

pub use config::ConfigLoader;
pub use enemies::EnemyLoader;
pub use factory::ContentFactory;
pub use item::ItemLoader;
pub use words::WordLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
