use crate::commands::{CmdMessage, CmdResult};
use crate::favorites::FavoriteSet;
use crate::store::DataStore;
use tracing::{debug, info};

/// Removes each id from the catalog and from the favorites together.
///
/// Ids that match no card are a no-op for both the catalog and the favorites,
/// reported as info rather than an error.
pub fn run<S: DataStore, I: AsRef<str>>(
    store: &mut S,
    favorites: &mut FavoriteSet,
    ids: &[I],
) -> CmdResult {
    let mut result = CmdResult::default();

    for id in ids {
        let id = id.as_ref();
        match store.remove_card(id) {
            Some(card) => {
                favorites.remove(id);
                info!(id = %card.id, title = %card.title, "card deleted");
                result.add_message(CmdMessage::success(format!("Card deleted: {}", card.title)));
                result.affected_cards.push(card);
            }
            None => {
                debug!(id, "delete of unknown card id ignored");
                result.add_message(CmdMessage::info(format!("No card with id #{}", id)));
            }
        }
    }

    result
}
