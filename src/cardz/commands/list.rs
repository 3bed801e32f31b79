use crate::commands::categories::chip_options;
use crate::commands::CmdResult;
use crate::favorites::FavoriteSet;
use crate::filter::{filter_cards, FilterCriteria};
use crate::index::{index_cards, DisplayCard};
use crate::model::CategoryFilter;
use crate::store::DataStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChip {
    pub filter: CategoryFilter,
    pub active: bool,
}

/// Everything a client needs to draw the main screen once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    pub search: String,
    pub chips: Vec<CategoryChip>,
    pub cards: Vec<DisplayCard>,
    pub filtered_count: usize,
    /// Global, not restricted to the visible cards
    pub favorite_count: usize,
}

pub fn view<S: DataStore>(
    store: &S,
    favorites: &FavoriteSet,
    criteria: &FilterCriteria,
) -> CatalogView {
    let all = store.list_cards();
    let visible = filter_cards(all, criteria);
    let cards = index_cards(&visible, favorites);

    let chips = chip_options(store, &criteria.category)
        .into_iter()
        .map(|filter| CategoryChip {
            active: filter == criteria.category,
            filter,
        })
        .collect();

    CatalogView {
        search: criteria.search.clone(),
        chips,
        filtered_count: cards.len(),
        cards,
        favorite_count: favorites.len(),
    }
}

pub fn run<S: DataStore>(
    store: &S,
    favorites: &FavoriteSet,
    criteria: &FilterCriteria,
) -> CmdResult {
    let view = view(store, favorites, criteria);
    CmdResult::default()
        .with_listed_cards(view.cards.clone())
        .with_view(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::StoreFixture;

    fn store() -> crate::store::memory::InMemoryStore {
        StoreFixture::new()
            .with_card("1", "React", "UI library", "Bibliothèque")
            .with_card("2", "Vue", "Progressive framework", "Framework")
            .with_card("3", "Rust", "Systems language", "Langage")
            .store
    }

    #[test]
    fn counts_filtered_and_global_favorites() {
        let store = store();
        let mut favs = FavoriteSet::new();
        favs.toggle("1");
        favs.toggle("3");

        let criteria = FilterCriteria::new("", CategoryFilter::Named("Framework".into()));
        let view = view(&store, &favs, &criteria);

        assert_eq!(view.filtered_count, 1);
        assert_eq!(view.favorite_count, 2);
        assert_eq!(view.cards[0].card.id, "2");
        assert_eq!(view.cards[0].index, DisplayIndex(1));
    }

    #[test]
    fn exactly_one_chip_is_active() {
        let store = store();
        let favs = FavoriteSet::new();

        let view = view(&store, &favs, &FilterCriteria::default());
        let active: Vec<&CategoryChip> = view.chips.iter().filter(|c| c.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].filter, CategoryFilter::All);
        assert_eq!(view.chips.len(), 4);
    }

    #[test]
    fn stale_category_keeps_its_chip() {
        let store = store();
        let favs = FavoriteSet::new();
        let criteria = FilterCriteria::new("", CategoryFilter::Named("CSS".into()));

        let view = view(&store, &favs, &criteria);

        assert!(view.cards.is_empty());
        let last = view.chips.last().unwrap();
        assert_eq!(last.filter, CategoryFilter::Named("CSS".into()));
        assert!(last.active);
    }

    #[test]
    fn run_lists_the_view_cards() {
        let store = store();
        let favs = FavoriteSet::new();
        let result = run(&store, &favs, &FilterCriteria::new("r", CategoryFilter::All));
        let ids: Vec<&str> = result.listed_cards.iter().map(|d| d.card.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(result.view.is_some());
    }
}
