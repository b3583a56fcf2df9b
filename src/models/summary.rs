use serde::{Deserialize, Serialize};

/// How many times a card was drawn across the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCount {
    pub card: String,
    pub count: usize,
}

/// Summary statistics for a ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of recorded readings
    pub total: usize,
    /// Most frequently drawn cards, highest count first
    pub top_cards: Vec<CardCount>,
}

impl Summary {
    /// Check if any card has been drawn at all
    pub fn has_cards(&self) -> bool {
        !self.top_cards.is_empty()
    }
}
