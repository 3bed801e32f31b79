use crate::commands::helpers::title_or_id;
use crate::commands::{CmdMessage, CmdResult};
use crate::favorites::FavoriteSet;
use crate::store::DataStore;
use tracing::debug;

/// Flips the favorite flag of each id. The catalog is only read, for titles.
pub fn toggle<S: DataStore, I: AsRef<str>>(
    store: &S,
    favorites: &mut FavoriteSet,
    ids: &[I],
) -> CmdResult {
    let mut result = CmdResult::default();

    for id in ids {
        let id = id.as_ref();
        let now_favorite = favorites.toggle(id);
        debug!(id, now_favorite, "favorite toggled");

        let label = title_or_id(store, id);
        let message = if now_favorite {
            format!("Added to favorites: {}", label)
        } else {
            format!("Removed from favorites: {}", label)
        };
        result.add_message(CmdMessage::success(message));

        if let Some(card) = store.get_card(id) {
            result.affected_cards.push(card.clone());
        }
    }

    result
}
