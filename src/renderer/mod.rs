//! Markdown renderer module
//!
//! Renders readings and summaries as Markdown. Line content is kept
//! readable when printed without styling.

use crate::models::{Reading, Summary, DATE_FORMAT};

/// Message printed when `list` finds nothing
pub const NO_READINGS_IN_RANGE: &str = "No readings found for the specified range.";

/// Characters termimad treats as inline markup
const MARKUP_CHARS: [char; 5] = ['\\', '*', '~', '`', '|'];

/// Markdown renderer for ledger output
pub struct Renderer {
    /// Output goes through termimad, so user text must not carry markup
    styled: bool,
}

impl Renderer {
    pub fn new(styled: bool) -> Self {
        Self { styled }
    }

    /// Render a list of readings
    pub fn render_readings(&self, readings: &[&Reading]) -> String {
        if readings.is_empty() {
            return NO_READINGS_IN_RANGE.to_string();
        }

        let mut output = String::new();
        output.push_str(&format!("# Readings ({})\n\n", readings.len()));

        for reading in readings {
            output.push_str(&self.render_reading(reading));
            output.push_str("\n\n");
        }

        output.trim_end().to_string()
    }

    /// Render a single reading as a section
    fn render_reading(&self, reading: &Reading) -> String {
        let mut output = String::new();

        let date = reading.date.format(DATE_FORMAT);
        if reading.spread.is_empty() {
            output.push_str(&format!("## {}\n\n", date));
        } else {
            output.push_str(&format!("## {} · {}\n\n", date, self.text(&reading.spread)));
        }

        if !reading.question.is_empty() {
            output.push_str(&format!("Question: {}\n", self.text(&reading.question)));
        }

        if reading.cards.is_empty() {
            output.push_str("Cards: (none)\n");
        } else {
            let cards: Vec<String> = reading.cards.iter().map(|c| self.text(c)).collect();
            output.push_str(&format!("Cards: {}\n", cards.join(", ")));
        }

        if !reading.notes.is_empty() {
            output.push_str(&format!("Notes: {}\n", self.text(&reading.notes)));
        }

        output.trim_end().to_string()
    }

    /// Render summary statistics
    pub fn render_summary(&self, summary: &Summary) -> String {
        let mut output = String::new();

        output.push_str("# Tarot Summary\n\n");
        output.push_str(&format!("Total readings: {}\n\n", summary.total));

        if summary.has_cards() {
            output.push_str("## Most frequent cards\n\n");
            for entry in &summary.top_cards {
                output.push_str(&format!("- {}: {}\n", self.text(&entry.card), entry.count));
            }
        } else {
            output.push_str("No cards drawn yet.\n");
        }

        output.trim_end().to_string()
    }

    /// User-supplied text as it should appear in the output.
    ///
    /// Styled output keeps user text on one line and escapes inline markup.
    /// Plain output prints it untouched.
    fn text(&self, value: &str) -> String {
        if !self.styled {
            return value.to_string();
        }

        let mut escaped = String::with_capacity(value.len());
        for (i, line) in value.lines().enumerate() {
            if i > 0 {
                escaped.push(' ');
            }
            for c in line.chars() {
                if MARKUP_CHARS.contains(&c) {
                    escaped.push('\\');
                }
                escaped.push(c);
            }
        }
        escaped
    }
}
