//! Challenge word list loader.

use std::path::Path;

use crate::catalog::WordList;
use crate::loaders::{LoadResult, read_file};

pub struct WordLoader;

impl WordLoader {
    pub fn load(path: &Path) -> LoadResult<WordList> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a word list. The list must be non-empty and contain no blank or
    /// whitespace-padded words.
    pub fn parse(content: &str) -> LoadResult<WordList> {
        let list: WordList = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse word list RON: {}", e))?;

        anyhow::ensure!(!list.is_empty(), "Word list is empty");
        for word in &list.words {
            anyhow::ensure!(
                !word.is_empty() && word.trim() == word,
                "Invalid challenge word {:?}",
                word
            );
        }
        Ok(list)
    }
}
