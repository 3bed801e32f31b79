use super::DataStore;
use crate::error::{CardzError, Result};
use crate::model::Card;

/// In-memory catalog. Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    cards: Vec<Card>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from cards already in catalog order.
    ///
    /// Callers are expected to have checked id uniqueness (see
    /// [`crate::store::seed::check_unique_ids`]).
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl DataStore for InMemoryStore {
    fn list_cards(&self) -> &[Card] {
        &self.cards
    }

    fn get_card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    fn prepend_card(&mut self, card: Card) -> Result<()> {
        if self.contains(&card.id) {
            return Err(CardzError::Store(format!(
                "Card id already in use: {}",
                card.id
            )));
        }
        self.cards.insert(0, card);
        Ok(())
    }

    fn remove_card(&mut self, id: &str) -> Option<Card> {
        let pos = self.cards.iter().position(|c| c.id == id)?;
        Some(self.cards.remove(pos))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn card(id: &str, title: &str, description: &str, category: &str) -> Card {
        Card {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            image: String::new(),
            category: category.to_string(),
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Appends a card at the end, keeping fixture order == catalog order.
        pub fn with_card(mut self, id: &str, title: &str, description: &str, category: &str) -> Self {
            self.store.cards.push(card(id, title, description, category));
            self
        }

        pub fn with_cards(mut self, count: usize, category: &str) -> Self {
            for i in 0..count {
                let n = self.store.cards.len() + 1;
                self.store.cards.push(card(
                    &n.to_string(),
                    &format!("Card {}", i + 1),
                    &format!("Description for card {}", i + 1),
                    category,
                ));
            }
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{card, StoreFixture};
    use super::*;

    #[test]
    fn prepend_puts_card_first() {
        let mut store = StoreFixture::new()
            .with_card("1", "React", "UI library", "Bibliothèque")
            .store;
        store
            .prepend_card(card("2", "Vue", "Framework", "Framework"))
            .unwrap();

        let ids: Vec<&str> = store.list_cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn prepend_rejects_taken_id() {
        let mut store = StoreFixture::new().with_card("1", "A", "a", "x").store;
        let err = store.prepend_card(card("1", "B", "b", "y")).unwrap_err();
        assert!(matches!(err, CardzError::Store(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_returns_card_and_keeps_order() {
        let mut store = StoreFixture::new().with_cards(3, "Outil").store;
        let removed = store.remove_card("2").unwrap();
        assert_eq!(removed.title, "Card 2");

        let ids: Vec<&str> = store.list_cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn remove_absent_is_none() {
        let mut store = StoreFixture::new().with_cards(1, "Outil").store;
        assert!(store.remove_card("nope").is_none());
        assert_eq!(store.len(), 1);
    }
}
