//! # Display Indexes
//!
//! Card ids are opaque (seed ids like `"3"`, generated ids are UUIDs) and are
//! not something anyone wants to type. Clients address cards by their position
//! in the list currently on screen instead: `1` is the first visible card.
//!
//! Indexes are therefore relative to the filtered view. After a new search the
//! same index may point to a different card; that is the point, the user acts on
//! what they see.
//!
//! A literal id can still be given with a `#` prefix (`#3`, `#9f1c...`), which
//! bypasses the view entirely.

use crate::favorites::FavoriteSet;
use crate::model::Card;
use std::fmt;
use std::str::FromStr;

/// 1-based position of a card in the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(pub usize);

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(DisplayIndex(n)),
            _ => Err(format!("Invalid index: {}", s)),
        }
    }
}

/// A user input selecting a card, either by its on-screen index or by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardSelector {
    Index(DisplayIndex),
    Id(String),
}

impl fmt::Display for CardSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardSelector::Index(idx) => write!(f, "{}", idx),
            CardSelector::Id(id) => write!(f, "#{}", id),
        }
    }
}

impl FromStr for CardSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(id) = s.strip_prefix('#') {
            if id.is_empty() {
                return Err("Empty card id after '#'".to_string());
            }
            return Ok(CardSelector::Id(id.to_string()));
        }
        DisplayIndex::from_str(s).map(CardSelector::Index)
    }
}

/// A visible card with its on-screen index and favorite flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCard {
    pub card: Card,
    pub index: DisplayIndex,
    pub is_favorite: bool,
}

/// Numbers the visible cards 1..n in the order given.
pub fn index_cards(cards: &[&Card], favorites: &FavoriteSet) -> Vec<DisplayCard> {
    cards
        .iter()
        .enumerate()
        .map(|(i, card)| DisplayCard {
            card: (*card).clone(),
            index: DisplayIndex(i + 1),
            is_favorite: favorites.contains(&card.id),
        })
        .collect()
}
