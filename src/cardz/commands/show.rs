use crate::commands::{CmdMessage, CmdResult};
use crate::favorites::FavoriteSet;
use crate::index::CardSelector;
use crate::model::Card;
use crate::store::DataStore;

/// A single card with everything the list view leaves out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDetail {
    pub selector: CardSelector,
    pub card: Card,
    pub is_favorite: bool,
}

pub fn run<S: DataStore>(
    store: &S,
    favorites: &FavoriteSet,
    resolved: &[(CardSelector, String)],
) -> CmdResult {
    let mut result = CmdResult::default();
    let mut details = Vec::with_capacity(resolved.len());

    for (selector, id) in resolved {
        match store.get_card(id) {
            Some(card) => details.push(CardDetail {
                selector: selector.clone(),
                card: card.clone(),
                is_favorite: favorites.contains(id),
            }),
            None => result.add_message(CmdMessage::warning(format!("No card with id #{}", id))),
        }
    }

    result.with_details(details)
}
