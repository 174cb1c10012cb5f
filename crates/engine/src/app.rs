//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::ports::StoragePort;
use crate::infrastructure::storage::FileStorage;
use crate::stores::ListStore;
use crate::use_cases::{ExploreSession, ListBrowser};

/// Main application state.
///
/// Owns the single `ListStore` instance; every screen gets it from here.
pub struct App {
    pub store: Arc<ListStore>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub lists: ListBrowser,
}

impl App {
    /// Build the app on the file storage named by `config`.
    ///
    /// The store is not loaded yet; call `store.load()` or `store.spawn_load()`.
    pub async fn new(config: &AppConfig) -> Self {
        let storage = FileStorage::open(config.storage_path()).await;
        tracing::info!(path = ?storage.path(), key = %config.lists_key, "Using file storage");
        Self::with_storage(Arc::new(storage), config.lists_key.clone())
    }

    /// Build the app on any storage adapter.
    pub fn with_storage(storage: Arc<dyn StoragePort>, lists_key: impl Into<String>) -> Self {
        let store = Arc::new(ListStore::new(storage, lists_key));
        let use_cases = UseCases {
            lists: ListBrowser::new(store.clone()),
        };
        Self { store, use_cases }
    }

    /// Fresh explore screen state sharing this app's store.
    pub fn explore_session(&self) -> ExploreSession {
        ExploreSession::new(self.store.clone())
    }
}
