//! Configuration module
//!
//! Handles loading and saving of tarot-ledger.toml configuration files and
//! resolves the ledger and config paths relative to the program directory.

mod types;

#[allow(unused_imports)]
pub use types::{Config, Display};

use crate::error::{LedgerError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file name looked up next to the program
pub const CONFIG_FILE_NAME: &str = "tarot-ledger.toml";

/// Ledger file name used when nothing else is configured
pub const LEDGER_FILE_NAME: &str = "ledger.json";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        LedgerError::Config(format!(
            "Cannot read config from '{}': {}. Run 'tarot-ledger config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    if config.top_cards == 0 {
        return Err(LedgerError::Config(format!(
            "top_cards in '{}' must be at least 1",
            path.display()
        )));
    }
    Ok(config)
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| LedgerError::Config(format!("Failed to serialize config: {}", e)))?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}

/// Load the explicit config if given, else the one next to the program,
/// else fall back to defaults
pub fn resolve(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load(path);
    }

    let default_path = default_config_path();
    if default_path.is_file() {
        debug!(path = %default_path.display(), "using config next to program");
        return load(&default_path);
    }

    debug!("no config file found, using defaults");
    Ok(Config::default())
}

/// Pick the ledger file: `--file`, then the config, then `ledger.json`
/// next to the program
pub fn ledger_path(file: Option<PathBuf>, config: &Config) -> PathBuf {
    file.or_else(|| config.ledger_file.clone())
        .unwrap_or_else(|| program_dir().join(LEDGER_FILE_NAME))
}

/// Default location of the config file
pub fn default_config_path() -> PathBuf {
    program_dir().join(CONFIG_FILE_NAME)
}

/// Directory containing the running executable, or `.` if unknown
fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
