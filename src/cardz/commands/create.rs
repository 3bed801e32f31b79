use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CardzError, Result};
use crate::model::{placeholder_image, Card, CardDraft, FORM_CATEGORIES};
use crate::store::DataStore;
use tracing::{info, warn};
use uuid::Uuid;

pub const REQUIRED_FIELDS_MESSAGE: &str =
    "Please fill in at least the title and the description";

/// Validates `draft` and prepends the resulting card.
///
/// Title and description are trimmed and must not end up empty. An empty image
/// is replaced by `placeholder_base` followed by the percent-encoded title. On
/// any validation failure the store is left untouched.
pub fn run<S: DataStore>(
    store: &mut S,
    draft: CardDraft,
    placeholder_base: &str,
) -> Result<CmdResult> {
    let title = draft.title.trim();
    let description = draft.description.trim();

    if title.is_empty() || description.is_empty() {
        warn!("rejected card draft with missing title or description");
        return Err(CardzError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
    }

    if !FORM_CATEGORIES.contains(&draft.category.as_str()) {
        warn!(category = %draft.category, "rejected card draft with unknown category");
        return Err(CardzError::Validation(format!(
            "Unknown category: {} (expected one of: {})",
            draft.category,
            FORM_CATEGORIES.join(", ")
        )));
    }

    let image = match draft.image.trim() {
        "" => placeholder_image(placeholder_base, title),
        uri => uri.to_string(),
    };

    let card = Card {
        id: fresh_id(store),
        title: title.to_string(),
        description: description.to_string(),
        image,
        category: draft.category,
    };
    store.prepend_card(card.clone())?;
    info!(id = %card.id, title = %card.title, "card created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Card created: {}", card.title)));
    Ok(result.with_affected_cards(vec![card]))
}

fn fresh_id<S: DataStore>(store: &S) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !store.contains(&id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_PLACEHOLDER_BASE;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn seeded() -> InMemoryStore {
        StoreFixture::new()
            .with_card("1", "React", "UI library", "Bibliothèque")
            .store
    }

    #[test]
    fn creates_and_prepends_with_placeholder() {
        let mut store = seeded();
        let draft = CardDraft::new("Svelte", "A reactive framework", "Framework");

        let result = run(&mut store, draft, DEFAULT_PLACEHOLDER_BASE).unwrap();

        assert_eq!(store.len(), 2);
        let first = &store.list_cards()[0];
        assert_eq!(first.title, "Svelte");
        assert_eq!(first.category, "Framework");
        assert!(first.image.starts_with(DEFAULT_PLACEHOLDER_BASE));
        assert!(first.image.contains("Svelte"));
        assert_ne!(first.id, "1");
        assert_eq!(result.affected_cards[0].id, first.id);
        assert_eq!(store.list_cards()[1].id, "1");
    }

    #[test]
    fn generated_ids_are_unique() {
        let mut store = InMemoryStore::new();
        for i in 0..20 {
            let draft = CardDraft::new(format!("Card {}", i), "desc", "Outil");
            run(&mut store, draft, DEFAULT_PLACEHOLDER_BASE).unwrap();
        }
        let mut ids: Vec<&str> = store.list_cards().iter().map(|c| c.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn keeps_given_image() {
        let mut store = InMemoryStore::new();
        let draft = CardDraft::new("Deno", "Secure runtime", "Runtime")
            .with_image("https://deno.land/logo.svg");
        run(&mut store, draft, DEFAULT_PLACEHOLDER_BASE).unwrap();
        assert_eq!(store.list_cards()[0].image, "https://deno.land/logo.svg");
    }

    #[test]
    fn rejects_empty_title() {
        let mut store = seeded();
        let err = run(
            &mut store,
            CardDraft::new("", "A reactive framework", "Framework"),
            DEFAULT_PLACEHOLDER_BASE,
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), REQUIRED_FIELDS_MESSAGE);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn rejects_whitespace_description() {
        let mut store = seeded();
        let err = run(
            &mut store,
            CardDraft::new("Svelte", "   \n\t", "Framework"),
            DEFAULT_PLACEHOLDER_BASE,
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn trims_title_and_description() {
        let mut store = InMemoryStore::new();
        run(
            &mut store,
            CardDraft::new("  Svelte ", " A reactive framework\n", "Framework"),
            DEFAULT_PLACEHOLDER_BASE,
        )
        .unwrap();
        let card = &store.list_cards()[0];
        assert_eq!(card.title, "Svelte");
        assert_eq!(card.description, "A reactive framework");
        assert!(card.image.ends_with("Svelte"));
    }

    #[test]
    fn rejects_category_outside_form_list() {
        let mut store = seeded();
        let err = run(
            &mut store,
            CardDraft::new("Zig", "Language", "Systems"),
            DEFAULT_PLACEHOLDER_BASE,
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn placeholder_uses_configured_base() {
        let mut store = InMemoryStore::new();
        run(
            &mut store,
            CardDraft::new("Next JS", "React framework", "Framework"),
            "https://img.example/?t=",
        )
        .unwrap();
        assert_eq!(store.list_cards()[0].image, "https://img.example/?t=Next%20JS");
    }
}
