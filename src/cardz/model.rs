use serde::{Deserialize, Serialize};
use std::fmt;

/// Categories offered by the creation form, in display order.
///
/// This list is independent of what the catalog currently holds: seed data may
/// carry categories outside of it, creation may not.
pub const FORM_CATEGORIES: [&str; 7] = [
    "Framework",
    "Langage",
    "Outil",
    "Bibliothèque",
    "Runtime",
    "CSS",
    "Base de données",
];

pub const DEFAULT_FORM_CATEGORY: &str = "Framework";

pub const DEFAULT_PLACEHOLDER_BASE: &str = "https://via.placeholder.com/150?text=";

/// Label of the category chip that matches every card.
pub const ALL_CATEGORIES_LABEL: &str = "all";

/// One catalog entry.
///
/// Seed records are read strictly: unknown fields fail the load instead of
/// being carried around untyped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub category: String,
}

/// A card as typed into the creation form, before it has an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
}

impl CardDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image: String::new(),
            category: category.into(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

impl Default for CardDraft {
    fn default() -> Self {
        Self::new("", "", DEFAULT_FORM_CATEGORY)
    }
}

/// The category half of the filter criteria.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_LABEL,
            CategoryFilter::Named(name) => name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Builds the image URI used when a card is created without one.
pub fn placeholder_image(base: &str, title: &str) -> String {
    format!("{}{}", base, urlencoding::encode(title))
}
