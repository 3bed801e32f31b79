use crate::filter::category_options;
use crate::model::{CategoryFilter, FORM_CATEGORIES};
use crate::store::DataStore;

/// Chips for the filter bar, derived from what the catalog holds right now.
pub fn filter_options<S: DataStore>(store: &S) -> Vec<CategoryFilter> {
    category_options(store.list_cards())
}

/// The fixed choices offered when creating a card.
pub fn form_options() -> &'static [&'static str] {
    &FORM_CATEGORIES
}

/// The chips as drawn on screen: the filter options, plus the current
/// selection when its last card is gone. A stale selection stays selected
/// until the user picks another one, so it keeps its chip and number.
pub fn chip_options<S: DataStore>(store: &S, selected: &CategoryFilter) -> Vec<CategoryFilter> {
    let mut options = filter_options(store);
    if !options.contains(selected) {
        options.push(selected.clone());
    }
    options
}

/// Resolves user input to one of the chips on screen.
///
/// Accepts a chip number (0 is "all"), an exact category name, or failing that a
/// case-insensitive name. Returns `None` when nothing matches.
pub fn resolve_filter<S: DataStore>(
    store: &S,
    selected: &CategoryFilter,
    input: &str,
) -> Option<CategoryFilter> {
    let options = chip_options(store, selected);
    let input = input.trim();

    if let Ok(n) = input.parse::<usize>() {
        return options.get(n).cloned();
    }

    options
        .iter()
        .find(|o| o.label() == input)
        .or_else(|| {
            let lower = input.to_lowercase();
            options.iter().find(|o| o.label().to_lowercase() == lower)
        })
        .cloned()
}
