//! Log setup for the game binary.
//!
//! The terminal is owned by the renderer, so logs never go to stdout/stderr.
//! When `TUI_FLAPPY_LOG` names a file, a `tracing` subscriber appends to it;
//! otherwise no subscriber is installed and core events cost nothing.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Env var naming the log file.
pub const LOG_FILE_ENV: &str = "TUI_FLAPPY_LOG";

/// Env var holding an `EnvFilter` directive (default `info`).
pub const LOG_LEVEL_ENV: &str = "TUI_FLAPPY_LOG_LEVEL";

/// Install the file subscriber if requested. Returns whether logging is on.
pub fn init_from_env() -> Result<bool> {
    let Some(path) = std::env::var_os(LOG_FILE_ENV) else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.to_string_lossy()))?;

    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))?;

    Ok(true)
}
