use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};

/// Date format used on the command line and in the storage file
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single recorded tarot reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// Day the reading took place (stored as `YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Question or focus of the reading
    #[serde(default)]
    pub question: String,
    /// Cards in the order they were drawn
    #[serde(default)]
    pub cards: Vec<String>,
    /// Layout used, e.g. "Three Card" or "Celtic Cross"
    #[serde(default)]
    pub spread: String,
    /// Free-form observations
    #[serde(default)]
    pub notes: String,
}

impl Reading {
    /// Create a reading with no question, spread or notes
    pub fn new(date: NaiveDate, cards: Vec<String>) -> Self {
        Self {
            date,
            question: String::new(),
            cards,
            spread: String::new(),
            notes: String::new(),
        }
    }

    /// Check that every card name is non-empty
    pub fn validate(&self) -> Result<()> {
        if let Some(pos) = self.cards.iter().position(|c| c.trim().is_empty()) {
            return Err(LedgerError::Validation(format!(
                "Card #{} of the reading on {} is empty",
                pos + 1,
                self.date.format(DATE_FORMAT)
            )));
        }
        Ok(())
    }
}

/// Parse a `YYYY-MM-DD` date, rejecting impossible calendar dates
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        LedgerError::Validation(format!(
            "Invalid date '{}' (expected YYYY-MM-DD): {}",
            value, e
        ))
    })
}

/// Split a comma-separated card list, trimming names and dropping blanks
pub fn parse_cards(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|card| !card.is_empty())
        .map(String::from)
        .collect()
}
