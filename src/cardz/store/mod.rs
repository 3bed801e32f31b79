//! # Storage Layer
//!
//! The [`DataStore`] trait is the seam between the catalog logic and wherever
//! cards are kept. Commands only ever talk to the trait.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the session store. An ordered `Vec<Card>`,
//!   newest cards first, gone when the session ends.
//!
//! ## Seeding
//!
//! [`seed`] reads the initial dataset, either the copy bundled into the binary
//! or a JSON file supplied at startup, and checks it before the store sees it.
//!
//! ## Ordering
//!
//! Stores preserve insertion order. New cards are prepended, so the most recent
//! one is always first; nothing ever re-sorts.

use crate::error::Result;
use crate::model::Card;

pub mod memory;
pub mod seed;

/// Abstract interface for card storage.
pub trait DataStore {
    /// All cards, in catalog order
    fn list_cards(&self) -> &[Card];

    /// Look up a card by id
    fn get_card(&self, id: &str) -> Option<&Card>;

    /// Insert a card at the front. Fails if the id is already taken.
    fn prepend_card(&mut self, card: Card) -> Result<()>;

    /// Remove a card, returning it if it was present
    fn remove_card(&mut self, id: &str) -> Option<Card>;

    fn contains(&self, id: &str) -> bool {
        self.get_card(id).is_some()
    }

    fn len(&self) -> usize {
        self.list_cards().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
