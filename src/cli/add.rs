use chrono::Local;
use clap::Args;
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::models::{parse_cards, parse_date, Reading, DATE_FORMAT};
use crate::store;

/// Arguments for recording a reading
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Question or focus of the reading
    #[arg(long)]
    pub question: Option<String>,

    /// Comma-separated list of cards drawn
    #[arg(long)]
    pub cards: String,

    /// Spread or layout used
    #[arg(long)]
    pub spread: Option<String>,

    /// Any observations or insights
    #[arg(long)]
    pub notes: Option<String>,

    /// Date of the reading in YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

/// Append a reading to the ledger
pub fn run(config: &Config, ledger: &Path, args: AddArgs) -> Result<()> {
    // Parse date (default to today)
    let date = match args.date.as_deref() {
        Some(value) => parse_date(value)?,
        None => Local::now().date_naive(),
    };

    let mut reading = Reading::new(date, parse_cards(&args.cards));
    reading.question = args.question.unwrap_or_default();
    reading.spread = args
        .spread
        .unwrap_or_else(|| config.default_spread.clone());
    reading.notes = args.notes.unwrap_or_default();
    let card_count = reading.cards.len();

    let readings = store::append(ledger, reading)?;
    info!(path = %ledger.display(), total = readings.len(), "reading added");

    println!(
        "Added reading on {} with {} card(s). Saved to {}.",
        date.format(DATE_FORMAT),
        card_count,
        ledger.display()
    );

    Ok(())
}
