//! # Filter Engine
//!
//! Derives what the user sees from the catalog and the current criteria. Every
//! call recomputes from scratch; catalogs are small enough that there is nothing
//! to cache.

use crate::model::{Card, CategoryFilter};

/// The search text and category chip currently applied to the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub category: CategoryFilter,
}

impl FilterCriteria {
    pub fn new(search: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    pub fn matches(&self, card: &Card) -> bool {
        matches_search(card, &self.search.to_lowercase()) && self.category.matches(&card.category)
    }
}

/// `needle` must already be lowercased.
fn matches_search(card: &Card, needle: &str) -> bool {
    needle.is_empty()
        || card.title.to_lowercase().contains(needle)
        || card.description.to_lowercase().contains(needle)
}

/// Returns the cards matching `criteria`, in catalog order.
pub fn filter_cards<'a>(cards: &'a [Card], criteria: &FilterCriteria) -> Vec<&'a Card> {
    cards.iter().filter(|card| criteria.matches(card)).collect()
}

/// The category chips for the current catalog: "all" followed by each distinct
/// category in the order it first appears.
pub fn category_options(cards: &[Card]) -> Vec<CategoryFilter> {
    let mut options = vec![CategoryFilter::All];
    for card in cards {
        if !options
            .iter()
            .any(|o| matches!(o, CategoryFilter::Named(n) if n == &card.category))
        {
            options.push(CategoryFilter::Named(card.category.clone()));
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::card;

    fn catalog() -> Vec<Card> {
        vec![
            card("1", "React", "UI library", "Bibliothèque"),
            card("2", "Vue.js", "Progressive framework", "Framework"),
            card("3", "Rust", "Systems language", "Langage"),
            card("4", "Svelte", "Compiler-first framework", "Framework"),
        ]
    }

    fn ids(cards: &[&Card]) -> Vec<String> {
        cards.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn unfiltered_returns_everything_in_order() {
        let cards = catalog();
        let criteria = FilterCriteria::default();
        assert_eq!(ids(&filter_cards(&cards, &criteria)), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn search_is_case_insensitive_on_title() {
        let cards = vec![card("1", "React", "UI library", "Bibliothèque")];

        let hit = filter_cards(&cards, &FilterCriteria::new("react", CategoryFilter::All));
        assert_eq!(ids(&hit), vec!["1"]);

        let miss = filter_cards(&cards, &FilterCriteria::new("vue", CategoryFilter::All));
        assert!(miss.is_empty());
    }

    #[test]
    fn search_matches_description() {
        let cards = catalog();
        let result = filter_cards(&cards, &FilterCriteria::new("FRAMEWORK", CategoryFilter::All));
        assert_eq!(ids(&result), vec!["2", "4"]);
    }

    #[test]
    fn search_handles_non_ascii_case() {
        let cards = vec![card("1", "Base", "Données relationnelles", "Base de données")];
        let result = filter_cards(&cards, &FilterCriteria::new("DONNÉES", CategoryFilter::All));
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn category_is_exact_match() {
        let cards = catalog();
        let criteria = FilterCriteria::new("", CategoryFilter::Named("Framework".into()));
        assert_eq!(ids(&filter_cards(&cards, &criteria)), vec!["2", "4"]);

        let lower = FilterCriteria::new("", CategoryFilter::Named("framework".into()));
        assert!(filter_cards(&cards, &lower).is_empty());
    }

    #[test]
    fn search_and_category_combine() {
        let cards = catalog();
        let criteria = FilterCriteria::new("svelte", CategoryFilter::Named("Framework".into()));
        assert_eq!(ids(&filter_cards(&cards, &criteria)), vec!["4"]);

        let wrong_cat = FilterCriteria::new("svelte", CategoryFilter::Named("Langage".into()));
        assert!(filter_cards(&cards, &wrong_cat).is_empty());
    }

    #[test]
    fn every_substring_of_a_title_finds_the_card() {
        let cards = catalog();
        let title = "Svelte";
        for start in 0..title.len() {
            for end in start + 1..=title.len() {
                let needle = title[start..end].to_uppercase();
                let result = filter_cards(&cards, &FilterCriteria::new(needle, CategoryFilter::All));
                assert!(result.iter().any(|c| c.id == "4"));
            }
        }
    }

    #[test]
    fn search_keeps_inner_spacing() {
        let cards = vec![
            card("1", "One", "a b", "Outil"),
            card("2", "Two", "a  b", "Outil"),
        ];
        let result = filter_cards(&cards, &FilterCriteria::new("a  b", CategoryFilter::All));
        assert_eq!(ids(&result), vec!["2"]);
    }

    #[test]
    fn category_options_first_seen_order() {
        let cards = vec![
            card("1", "Vue", "x", "Framework"),
            card("2", "Rust", "x", "Langage"),
            card("3", "Angular", "x", "Framework"),
        ];
        let labels: Vec<String> = category_options(&cards)
            .iter()
            .map(|o| o.label().to_string())
            .collect();
        assert_eq!(labels, vec!["all", "Framework", "Langage"]);
    }

    #[test]
    fn category_options_of_empty_catalog() {
        assert_eq!(category_options(&[]), vec![CategoryFilter::All]);
    }
}
