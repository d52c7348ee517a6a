//! CLI runtime configuration.
use std::env;
use std::path::PathBuf;

/// Configuration for one demo run.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding `config.toml`, `enemies.ron`, `items.ron` and `words.ron`.
    pub data_dir: PathBuf,
    /// Seed for enemy selection, the scripted typist and drop rolls.
    pub seed: u64,
    /// Enemy to fight; picked from the catalog by seed when unset.
    pub enemy: Option<String>,
    pub player_name: String,
    /// Milliseconds allowed per challenge word.
    pub time_limit_ms: u64,
    pub session_id: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/../../game/content/data"
            )),
            seed: 42,
            enemy: None,
            player_name: "root".to_owned(),
            time_limit_ms: 3_000,
            session_id: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_DATA_DIR` - Content directory (default: the bundled sample data)
    /// - `BATTLE_SEED` - Seed for the scripted run (default: 42)
    /// - `BATTLE_ENEMY` - Enemy name (default: chosen by seed)
    /// - `BATTLE_PLAYER_NAME` - Player name (default: root)
    /// - `BATTLE_TIME_LIMIT_MS` - Per-word time limit (default: 3000)
    /// - `BATTLE_SESSION_ID` - Session identifier for log files (default: auto-generated)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("BATTLE_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(seed) = read_env::<u64>("BATTLE_SEED") {
            config.seed = seed;
        }
        config.enemy = env::var("BATTLE_ENEMY").ok().filter(|name| !name.is_empty());
        if let Ok(name) = env::var("BATTLE_PLAYER_NAME") {
            config.player_name = name;
        }
        if let Some(limit) = read_env::<u64>("BATTLE_TIME_LIMIT_MS") {
            config.time_limit_ms = limit.max(1);
        }
        config.session_id = env::var("BATTLE_SESSION_ID").ok();

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
