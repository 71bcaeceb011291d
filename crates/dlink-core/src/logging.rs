//! Logging init: file under XDG state dir, or graceful fallback to stderr.
//!
//! Stdout belongs to the operator (tool listing, prompts, the direct URL), so
//! the subscriber never writes there. Direct URLs are signed; they are only
//! logged at debug level.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Targets are crate names: `dlink` is the binary, `dlink_core` this library.
pub const DEFAULT_FILTER: &str = "info,dlink=debug,dlink_core=debug";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize structured logging to `~/.local/state/dlink/dlink.log`.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dlink")?;
    let log_dir = xdg_dirs.get_state_home().join("dlink");
    fs::create_dir_all(&log_dir)?;
    let log_file_path: PathBuf = log_dir.join("dlink.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {e}"))?;

    tracing::info!("dlink logging initialized at {}", log_file_path.display());
    Ok(())
}

/// Initialize logging to stderr only (no file). Use when init_logging() fails so the CLI doesn't crash.
/// Defaults to `warn` so the operator's terminal stays readable.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
