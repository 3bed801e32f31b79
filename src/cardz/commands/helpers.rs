use crate::error::{CardzError, Result};
use crate::filter::{filter_cards, FilterCriteria};
use crate::index::CardSelector;
use crate::store::DataStore;

/// Maps selectors to card ids.
///
/// Indexes are looked up in the view produced by `criteria`; an index past the
/// end of the view fails the whole batch so nothing is half-applied. `#id`
/// selectors pass through unchecked.
pub fn resolve_selectors<S: DataStore>(
    store: &S,
    criteria: &FilterCriteria,
    selectors: &[CardSelector],
) -> Result<Vec<(CardSelector, String)>> {
    let visible = filter_cards(store.list_cards(), criteria);

    selectors
        .iter()
        .map(|sel| match sel {
            CardSelector::Index(idx) => idx
                .0
                .checked_sub(1)
                .and_then(|i| visible.get(i))
                .map(|card| (sel.clone(), card.id.clone()))
                .ok_or_else(|| CardzError::Api(format!("Index {} not found in current view", idx))),
            CardSelector::Id(id) => Ok((sel.clone(), id.clone())),
        })
        .collect()
}

/// Title of the card with `id`, or the id itself when no such card exists.
pub fn title_or_id<S: DataStore>(store: &S, id: &str) -> String {
    store
        .get_card(id)
        .map(|c| c.title.clone())
        .unwrap_or_else(|| format!("#{}", id))
}
