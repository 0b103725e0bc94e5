//! Process configuration read from environment variables.
//!
//! - `TETRIS_SEED`: RNG seed (default: derived from the system clock)
//! - `TETRIS_LOG_PATH`: write logs to this file (default: logging off unless
//!   `RUST_LOG` is set)
//! - `TETRIS_CELL_WIDTH`: terminal columns per board cell, 1..=4 (default: 2)
//!
//! Values that fail to parse fall back to their defaults. The rejections are
//! kept so the binary can log them once the logger is up.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub const SEED_VAR: &str = "TETRIS_SEED";
pub const LOG_PATH_VAR: &str = "TETRIS_LOG_PATH";
pub const CELL_WIDTH_VAR: &str = "TETRIS_CELL_WIDTH";

pub const DEFAULT_CELL_WIDTH: u16 = 2;
pub const MAX_CELL_WIDTH: u16 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub log_path: Option<PathBuf>,
    pub cell_width: u16,
    /// Human-readable notes about ignored values.
    pub rejected: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            log_path: None,
            cell_width: DEFAULT_CELL_WIDTH,
            rejected: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(raw) = read(SEED_VAR) {
            match raw.parse::<u32>() {
                Ok(seed) => config.seed = seed,
                Err(_) => config
                    .rejected
                    .push(format!("{SEED_VAR}={raw:?} is not a u32 seed")),
            }
        }

        config.log_path = read(LOG_PATH_VAR).map(PathBuf::from);

        if let Some(raw) = read(CELL_WIDTH_VAR) {
            match raw.parse::<u16>() {
                Ok(w) if (1..=MAX_CELL_WIDTH).contains(&w) => config.cell_width = w,
                _ => config.rejected.push(format!(
                    "{CELL_WIDTH_VAR}={raw:?} is outside 1..={MAX_CELL_WIDTH}"
                )),
            }
        }

        config
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
