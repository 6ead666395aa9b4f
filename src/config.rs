//! Command-line and environment configuration.
//!
//! ```text
//! dois-mil [SIZE]
//! ```
//!
//! `SIZE` is the grid side length. A missing or non-numeric value, or one
//! below 2, falls back to 4. Values above 32 are rejected.
//!
//! # Environment Variables
//!
//! - `DOIS_MIL_SEED`: fixed seed for the initial tiles (u32)
//! - `DOIS_MIL_LOG`: log file path; logging is off when unset or empty
//! - `RUST_LOG`: log filter (see `tracing_subscriber::EnvFilter`)

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};

use crate::types::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE};

pub const SEED_ENV: &str = "DOIS_MIL_SEED";
pub const LOG_ENV: &str = "DOIS_MIL_LOG";

pub const USAGE: &str = "usage: dois-mil [SIZE]

  SIZE   grid side length, at most 32 (default 4; values below 2 use the default)

keys: arrows, wasd or hjkl to move; esc or q to quit
env:  DOIS_MIL_SEED=<u32>  DOIS_MIL_LOG=<path>  RUST_LOG=<filter>
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub size: usize,
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            seed: None,
            log_path: None,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(Config),
    Help,
}

/// Parse command-line arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Command> {
    let mut config = Config::default();
    let mut positional = 0usize;

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            other if other.starts_with("--") => {
                return Err(anyhow!("unknown argument: {}", other));
            }
            other => {
                positional += 1;
                if positional > 1 {
                    return Err(anyhow!("unexpected argument: {}", other));
                }
                config.size = parse_size(other)?;
            }
        }
    }

    Ok(Command::Play(config))
}

/// Grid size from a raw argument.
///
/// Anything that is not a plain decimal number, or is below the minimum,
/// falls back to the default. Numbers above [`MAX_GRID_SIZE`] are an error.
pub fn parse_size(raw: &str) -> Result<usize> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(DEFAULT_GRID_SIZE);
    }
    // All digits, so a parse failure can only mean overflow.
    let size = raw.parse::<usize>().unwrap_or(usize::MAX);
    if size < MIN_GRID_SIZE {
        return Ok(DEFAULT_GRID_SIZE);
    }
    if size > MAX_GRID_SIZE {
        bail!("grid size {} is too large (maximum {})", raw, MAX_GRID_SIZE);
    }
    Ok(size)
}

impl Config {
    /// Fill env-provided settings from the process environment.
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Fill env-provided settings through `lookup`.
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        self.seed = lookup(SEED_ENV).and_then(|s| s.trim().parse().ok());
        self.log_path = lookup(LOG_ENV)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });
        self
    }
}
