//! The card creation form.
//!
//! Holds what the user has typed so far, independently of how a client draws
//! it. Submitting goes through [`CardzApi::create_card`]; a rejected submission
//! keeps the form open with its fields intact so the user can fix them.

use crate::api::CardzApi;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{CardDraft, DEFAULT_FORM_CATEGORY, FORM_CATEGORIES};
use crate::store::DataStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardForm {
    pub title: String,
    pub description: String,
    pub image: String,
    category: String,
    default_category: String,
    open: bool,
}

impl Default for CardForm {
    fn default() -> Self {
        Self::new(DEFAULT_FORM_CATEGORY)
    }
}

impl CardForm {
    /// A closed, empty form. `default_category` falls back to
    /// [`DEFAULT_FORM_CATEGORY`] when it is not one of [`FORM_CATEGORIES`].
    pub fn new(default_category: &str) -> Self {
        let default_category = if FORM_CATEGORIES.contains(&default_category) {
            default_category
        } else {
            DEFAULT_FORM_CATEGORY
        };
        Self {
            title: String::new(),
            description: String::new(),
            image: String::new(),
            category: default_category.to_string(),
            default_category: default_category.to_string(),
            open: false,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hides the form. Typed values are kept for the next time it opens.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Position of the selected category in [`FORM_CATEGORIES`].
    pub fn category_position(&self) -> usize {
        FORM_CATEGORIES
            .iter()
            .position(|c| *c == self.category)
            .unwrap_or(0)
    }

    /// Picks a category by its position in [`FORM_CATEGORIES`]. Out of range
    /// positions are ignored; returns whether the selection changed.
    pub fn select_category(&mut self, position: usize) -> bool {
        match FORM_CATEGORIES.get(position) {
            Some(category) => {
                self.category = category.to_string();
                true
            }
            None => false,
        }
    }

    pub fn draft(&self) -> CardDraft {
        CardDraft::new(&self.title, &self.description, &self.category).with_image(&self.image)
    }

    pub fn reset(&mut self) {
        self.title.clear();
        self.description.clear();
        self.image.clear();
        self.category = self.default_category.clone();
    }

    /// Creates a card from the current fields.
    ///
    /// On success the form is closed and reset. On failure it is left exactly
    /// as it was, still open, and the error is returned for display.
    pub fn submit<S: DataStore>(&mut self, api: &mut CardzApi<S>) -> Result<CmdResult> {
        let result = api.create_card(self.draft())?;
        self.reset();
        self.close();
        Ok(result)
    }
}
