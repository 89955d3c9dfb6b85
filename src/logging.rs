//! Logging init: file under the XDG state dir, or stderr when that fails.

use std::fs;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,rentry_raw=debug"))
}

/// Initialize structured logging to `~/.local/state/rentry-raw/rentry-raw.log`.
/// Returns Err when the log file cannot be placed so the caller can fall back
/// to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rentry-raw")?;
    let log_path = xdg_dirs.place_state_file("rentry-raw.log")?;

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("logging initialized at {}", log_path.display());
    Ok(())
}

/// Stderr-only logging, for when the state dir is unavailable.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
