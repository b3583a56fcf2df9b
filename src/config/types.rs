use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::query::DEFAULT_TOP_CARDS;

/// Tarot ledger configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ledger file used when `--file` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_file: Option<PathBuf>,

    /// Spread recorded when `add` is run without `--spread`
    pub default_spread: String,

    /// Number of cards reported by `summary`
    pub top_cards: usize,

    /// Display settings
    pub display: Display,
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Display {
    /// Allow styled terminal output (still off when stdout is not a TTY)
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger_file: None,
            default_spread: String::new(),
            top_cards: DEFAULT_TOP_CARDS,
            display: Display::default(),
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self { color: true }
    }
}
