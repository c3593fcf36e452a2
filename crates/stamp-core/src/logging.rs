//! Logging init: file under the XDG state dir, or stderr fallback.

use anyhow::Result;
use std::fs;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stamp_core=debug,stamp_cli=debug"))
}

/// Initialize structured logging to `~/.local/state/stamp/stamp.log`.
/// Returns Err if the log file cannot be opened so the caller can fall back
/// to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("stamp")?;
    let log_dir = xdg_dirs.get_state_home().join("stamp");

    fs::create_dir_all(&log_dir)?;
    let log_file_path = log_dir.join("stamp.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("stamp logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only (no file). Used when init_logging()
/// fails so the CLI still logs somewhere.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
