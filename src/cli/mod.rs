//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - add: Record a new reading
//! - list: Show readings within a date range
//! - summary: Show reading count and most frequent cards
//! - config init: Initialize configuration file
pub mod add;
pub mod config;
pub mod list;
pub mod summary;
