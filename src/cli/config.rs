use crate::config::{self, Config};
use crate::error::Result;
use std::path::PathBuf;

/// Initialize tarot-ledger.toml configuration file
pub fn init(path: Option<PathBuf>) -> Result<()> {
    let config_path = path.unwrap_or_else(config::default_config_path);

    // Check if file already exists
    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    config::save(&Config::default(), &config_path)?;

    println!("Configuration file created: {}", config_path.display());
    println!("\nNext steps:");
    println!(
        "1. Edit {} to set a default spread or ledger_file",
        config_path.display()
    );
    println!("2. Run 'tarot-ledger add --cards \"The Fool\"' to record your first reading");

    Ok(())
}
