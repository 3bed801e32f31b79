//! # API Facade
//!
//! [`CardzApi`] is the session: it owns the catalog store, the favorite set and
//! the filter criteria for as long as a client runs, and is the single entry
//! point clients talk to. Nothing here is global; a client creates one
//! `CardzApi` and passes it by reference to whatever needs it.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to the command functions in [`crate::commands`]
//! - **Normalizes inputs**: selector strings (`"2"`, `"#abc"`) become card ids,
//!   resolved against the view the user is looking at
//! - **Returns structured types** (`CmdResult`, `CatalogView`), never strings
//!
//! Business rules (validation, ordering, favorite cleanup) live in the
//! commands. The API does no I/O.

use crate::commands::{self, CatalogView, CmdResult};
use crate::error::{CardzError, Result};
use crate::favorites::FavoriteSet;
use crate::filter::{filter_cards, FilterCriteria};
use crate::index::CardSelector;
use crate::model::{Card, CardDraft, CategoryFilter, DEFAULT_PLACEHOLDER_BASE};
use crate::store::DataStore;
use std::str::FromStr;
use tracing::debug;

pub struct CardzApi<S: DataStore> {
    store: S,
    favorites: FavoriteSet,
    criteria: FilterCriteria,
    placeholder_base: String,
}

impl<S: DataStore> CardzApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            favorites: FavoriteSet::new(),
            criteria: FilterCriteria::default(),
            placeholder_base: DEFAULT_PLACEHOLDER_BASE.to_string(),
        }
    }

    pub fn with_placeholder_base(mut self, base: impl Into<String>) -> Self {
        self.placeholder_base = base.into();
        self
    }

    pub fn create_card(&mut self, draft: CardDraft) -> Result<CmdResult> {
        commands::create::run(&mut self.store, draft, &self.placeholder_base)
    }

    /// Deletes by id. Unknown ids are a no-op.
    pub fn delete_card(&mut self, id: &str) -> CmdResult {
        commands::delete::run(&mut self.store, &mut self.favorites, &[id])
    }

    pub fn delete_cards<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let ids = self.resolve(selectors)?;
        Ok(commands::delete::run(&mut self.store, &mut self.favorites, &ids[..]))
    }

    /// Toggles by id. Returns true when the id is now a favorite.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        self.favorites.toggle(id)
    }

    pub fn toggle_favorites<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let ids = self.resolve(selectors)?;
        Ok(commands::favorite::toggle(&self.store, &mut self.favorites, &ids[..]))
    }

    pub fn show_cards<I: AsRef<str>>(&self, selectors: &[I]) -> Result<CmdResult> {
        let parsed = parse_selectors(selectors)?;
        let resolved = commands::helpers::resolve_selectors(&self.store, &self.criteria, &parsed)?;
        Ok(commands::show::run(&self.store, &self.favorites, &resolved))
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.criteria.search = text.into();
        debug!(search = %self.criteria.search, "search updated");
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        debug!(category = %category, "category selected");
        self.criteria.category = category;
    }

    /// Selects the chip matching `input` (number, name, or case-insensitive
    /// name). Returns false and leaves the selection alone when nothing matches.
    pub fn select_category_by_input(&mut self, input: &str) -> bool {
        match commands::categories::resolve_filter(&self.store, &self.criteria.category, input) {
            Some(category) => {
                self.select_category(category);
                true
            }
            None => false,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn visible_cards(&self) -> Vec<&Card> {
        filter_cards(self.store.list_cards(), &self.criteria)
    }

    pub fn view(&self) -> CatalogView {
        commands::list::view(&self.store, &self.favorites, &self.criteria)
    }

    pub fn list_cards(&self) -> CmdResult {
        commands::list::run(&self.store, &self.favorites, &self.criteria)
    }

    pub fn categories(&self) -> Vec<CategoryFilter> {
        commands::categories::filter_options(&self.store)
    }

    pub fn form_categories(&self) -> &'static [&'static str] {
        commands::categories::form_options()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    fn resolve<I: AsRef<str>>(&self, selectors: &[I]) -> Result<Vec<String>> {
        let parsed = parse_selectors(selectors)?;
        let resolved = commands::helpers::resolve_selectors(&self.store, &self.criteria, &parsed)?;
        Ok(resolved.into_iter().map(|(_, id)| id).collect())
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<CardSelector>> {
    if inputs.is_empty() {
        return Err(CardzError::Api("No card selected".to_string()));
    }
    inputs
        .iter()
        .map(|s| CardSelector::from_str(s.as_ref()).map_err(CardzError::Api))
        .collect()
}

pub use crate::commands::{CardDetail, CategoryChip, CmdMessage, MessageLevel};
