//! Browse saved lists - filtering and removal for the lists screen.

use std::sync::Arc;

use restolist_domain::{ListName, RestaurantRecord};

use crate::stores::{ListStore, ListStoreError};

/// What the lists screen should render for one list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    /// The startup load hasn't finished; the store isn't authoritative yet.
    Loading,
    /// The list has no records at all.
    Empty,
    /// The list has records but none match the query.
    NoMatches,
    Records(Vec<RestaurantRecord>),
}

/// Saved list browsing over a shared `ListStore`.
pub struct ListBrowser {
    store: Arc<ListStore>,
}

impl ListBrowser {
    pub fn new(store: Arc<ListStore>) -> Self {
        Self { store }
    }

    /// Records of `list` matching `query` on name or address, ignoring case.
    pub fn view(&self, list: ListName, query: &str) -> ListView {
        if !self.store.is_ready() {
            return ListView::Loading;
        }

        let lists = self.store.snapshot();
        if lists.get(list).is_empty() {
            return ListView::Empty;
        }

        let matches: Vec<RestaurantRecord> =
            lists.search(list, query).into_iter().cloned().collect();
        if matches.is_empty() {
            ListView::NoMatches
        } else {
            ListView::Records(matches)
        }
    }

    /// Counts shown on the list tabs, `(favorites, to_visit)`.
    pub fn counts(&self) -> (usize, usize) {
        let lists = self.store.snapshot();
        (lists.len(ListName::Favorites), lists.len(ListName::ToVisit))
    }

    pub async fn remove_from(&self, list: ListName, place_id: &str) -> Result<bool, ListStoreError> {
        self.store.remove(list, place_id).await
    }
}
