mod cli;
mod config;
mod display;
mod error;
mod logging;
mod models;
mod query;
mod renderer;
mod store;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::cli::add::AddArgs;
use crate::config::Config;

#[derive(Parser)]
#[command(name = "tarot-ledger")]
#[command(about = "Command-line journal for tarot readings", long_about = None)]
struct Cli {
    /// Path to the ledger JSON file (defaults to ledger.json next to the program)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Path to config file (defaults to tarot-ledger.toml next to the program)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new tarot reading
    Add(AddArgs),
    /// List readings, optionally filtered by date range
    List {
        /// Start date YYYY-MM-DD (inclusive)
        #[arg(long)]
        from: Option<String>,

        /// End date YYYY-MM-DD (inclusive)
        #[arg(long)]
        to: Option<String>,

        /// Print readings as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show total readings and the most frequent cards
    Summary {
        /// Print summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize tarot-ledger.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

/// Resolve the config and the ledger path for ledger commands
fn open(config_path: Option<&Path>, file: Option<PathBuf>) -> error::Result<(Config, PathBuf)> {
    let config = config::resolve(config_path)?;
    let ledger = config::ledger_path(file, &config);
    Ok((config, ledger))
}

fn run(cli: Cli) -> error::Result<()> {
    match cli.command {
        Commands::Add(args) => {
            let (config, ledger) = open(cli.config.as_deref(), cli.file)?;
            cli::add::run(&config, &ledger, args)
        }
        Commands::List { from, to, json } => {
            let (config, ledger) = open(cli.config.as_deref(), cli.file)?;
            cli::list::run(&config, &ledger, from, to, json)
        }
        Commands::Summary { json } => {
            let (config, ledger) = open(cli.config.as_deref(), cli.file)?;
            cli::summary::run(&config, &ledger, json)
        }
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
