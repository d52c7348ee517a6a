//! Platform-specific directory utilities.

use std::path::PathBuf;

/// Get the platform-specific log directory.
///
/// - macOS: `~/Library/Caches/typing-battle/logs`
/// - Linux: `~/.cache/typing-battle/logs` (or `$XDG_CACHE_HOME/typing-battle/logs`)
/// - Windows: `%LOCALAPPDATA%\typing-battle\cache\logs`
/// - Fallback: `/tmp/typing-battle/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "typing-battle")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/typing-battle"))
        .join("logs")
}
