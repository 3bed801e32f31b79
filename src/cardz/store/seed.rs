//! Initial catalog data.
//!
//! The default dataset ships inside the binary. A JSON file with the same shape
//! (an array of card objects) can replace it at startup.

use crate::error::{CardzError, Result};
use crate::model::Card;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

const BUNDLED_CARDS: &str = include_str!("../../../data/cards.json");

/// Parses the dataset bundled with the binary.
pub fn bundled() -> Result<Vec<Card>> {
    parse(BUNDLED_CARDS)
}

/// Reads and parses a seed file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Card>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| CardzError::Seed(format!("cannot read {}: {}", path.display(), e)))?;
    let cards = parse(&content)?;
    debug!(path = %path.display(), count = cards.len(), "loaded seed file");
    Ok(cards)
}

/// Parses seed JSON and checks the catalog invariants.
pub fn parse(json: &str) -> Result<Vec<Card>> {
    let cards: Vec<Card> = serde_json::from_str(json)?;
    check_unique_ids(&cards)?;
    Ok(cards)
}

pub fn check_unique_ids(cards: &[Card]) -> Result<()> {
    let mut seen = HashSet::with_capacity(cards.len());
    for card in cards {
        if !seen.insert(card.id.as_str()) {
            return Err(CardzError::DuplicateId(card.id.clone()));
        }
    }
    Ok(())
}
