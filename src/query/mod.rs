//! Query module
//!
//! Pure functions over the in-memory ledger: date-range filtering and
//! card frequency counts.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{CardCount, Reading, Summary};

/// Default number of cards reported by [`summarize`]
pub const DEFAULT_TOP_CARDS: usize = 3;

/// Readings dated within `[from, to]`, in ledger order.
///
/// Either bound may be `None` for an open range.
pub fn in_range(
    readings: &[Reading],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<&Reading> {
    readings
        .iter()
        .filter(|r| from.is_none_or(|from| r.date >= from))
        .filter(|r| to.is_none_or(|to| r.date <= to))
        .collect()
}

/// Count every card across all readings.
///
/// Result is ordered by count (highest first). Equal counts keep the order
/// in which the cards were first seen, scanning readings top to bottom.
pub fn card_frequency(readings: &[Reading]) -> Vec<CardCount> {
    let mut counts: Vec<CardCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for card in readings.iter().flat_map(|r| r.cards.iter()) {
        match index.get(card.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(card.as_str(), counts.len());
                counts.push(CardCount {
                    card: card.clone(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-seen order for ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Total reading count plus the `top` most frequently drawn cards
pub fn summarize(readings: &[Reading], top: usize) -> Summary {
    let mut top_cards = card_frequency(readings);
    top_cards.truncate(top);

    Summary {
        total: readings.len(),
        top_cards,
    }
}
