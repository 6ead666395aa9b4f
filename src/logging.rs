//! Tracing subscriber setup
//!
//! The game owns the terminal in raw mode, so logs never go to stdout or
//! stderr. They are written to the file named by `DOIS_MIL_LOG`; without it
//! no subscriber is installed and the `tracing` macros are no-ops.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber writing to `log_file_path`.
pub fn init_global(log_file_path: &Path) -> Result<()> {
    let log_file = File::create(log_file_path)
        .with_context(|| format!("failed to create log file {}", log_file_path.display()))?;
    build_subscriber(log_file)
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(())
}

/// Build the subscriber: fmt layer into `log_file`, filtered by `RUST_LOG`
/// (DEBUG when unset).
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}
