//! Data models module
//!
//! Defines the reading record stored in the ledger and the summary
//! statistics computed over it.

pub mod reading;
pub mod summary;

pub use reading::{parse_cards, parse_date, Reading, DATE_FORMAT};
pub use summary::{CardCount, Summary};
