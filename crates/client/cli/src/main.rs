//! Demo driver for the typing battle engine.
//!
//! Loads content, builds a player, and runs one seeded battle in which a
//! scripted typist stands in for keyboard input.
mod config;
mod demo;
mod dirs;

use anyhow::Result;
use config::CliConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = setup_logging(config.session_id.as_deref())?;

    let summary = demo::run(&config)?;
    println!("{summary}");
    Ok(())
}

/// Setup logging to a per-session file.
fn setup_logging(session_id: Option<&str>) -> Result<WorkerGuard> {
    use std::time::{SystemTime, UNIX_EPOCH};

    let session_id = match session_id {
        Some(id) => id.to_owned(),
        None => {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{}", timestamp)
        }
    };

    // Create session-specific log directory
    let session_log_dir = dirs::log_dir().join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "battle.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    // stdout carries the battle transcript, so logs go to the file only
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/battle.log", session_log_dir.display());

    Ok(guard)
}
