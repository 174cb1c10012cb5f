//! Saved restaurant lists, kept durable.
//!
//! `ListStore` owns the in-memory snapshot of both lists and the storage
//! key it is persisted under. Every mutation runs the whole cycle
//!
//! 1. wait for earlier mutations (and the initial load) to finish,
//! 2. compute the next snapshot,
//! 3. write it in full under one key,
//! 4. adopt it and notify subscribers,
//!
//! so memory never runs ahead of what is on disk. A failed write leaves the
//! snapshot untouched and is returned to the caller.

use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

use restolist_domain::{ListName, Membership, RestaurantLists, RestaurantRecord};

use crate::infrastructure::ports::{StorageError, StoragePort};

/// Where the store is in its one-time startup load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Uninitialized,
    Loading,
    /// The snapshot is authoritative. Stays here for the store's lifetime.
    Ready,
}

/// What the startup load found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// An earlier `load` (or mutation) already did it.
    AlreadyLoaded,
    /// Nothing was saved yet.
    Empty,
    Restored { favorites: usize, to_visit: usize },
    /// The saved data couldn't be read; the store starts empty.
    Recovered { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

#[derive(Debug, thiserror::Error)]
pub enum ListStoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Failed to serialize restaurant lists: {0}")]
    Serialization(String),
}

impl ListStoreError {
    /// True when the durable write itself failed.
    pub fn is_write_failure(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_write())
    }
}

pub struct ListStore {
    storage: Arc<dyn StoragePort>,
    key: String,
    state: watch::Sender<RestaurantLists>,
    phase: watch::Sender<LoadPhase>,
    /// Serializes load and every read-modify-write cycle.
    mutations: Mutex<()>,
}

impl ListStore {
    /// Create an empty, not yet loaded store persisting under `key`.
    pub fn new(storage: Arc<dyn StoragePort>, key: impl Into<String>) -> Self {
        let (state, _) = watch::channel(RestaurantLists::new());
        let (phase, _) = watch::channel(LoadPhase::Uninitialized);
        Self {
            storage,
            key: key.into(),
            state,
            phase,
            mutations: Mutex::new(()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted snapshot and adopt it.
    ///
    /// Runs once; later calls return `AlreadyLoaded`. Read and parse
    /// failures are logged and leave the store empty, never failing the
    /// caller.
    pub async fn load(&self) -> LoadOutcome {
        let _guard = self.mutations.lock().await;
        self.load_locked().await
    }

    /// Run `load` on a background task.
    pub fn spawn_load(self: &Arc<Self>) -> JoinHandle<LoadOutcome> {
        let store = Arc::clone(self);
        tokio::spawn(async move { store.load().await })
    }

    pub fn phase(&self) -> LoadPhase {
        *self.phase.borrow()
    }

    pub fn is_ready(&self) -> bool {
        self.phase() == LoadPhase::Ready
    }

    /// Resolve once the startup load has finished.
    pub async fn wait_until_ready(&self) {
        let mut rx = self.phase.subscribe();
        // The sender lives in `self`, so the channel can't close while we wait.
        rx.wait_for(|phase| *phase == LoadPhase::Ready).await.ok();
    }

    /// Copy of the current snapshot.
    pub fn snapshot(&self) -> RestaurantLists {
        self.state.borrow().clone()
    }

    /// Records of one list, in insertion order.
    pub fn list(&self, list: ListName) -> Vec<RestaurantRecord> {
        self.state.borrow().get(list).to_vec()
    }

    pub fn contains(&self, list: ListName, place_id: &str) -> bool {
        self.state.borrow().contains(list, place_id)
    }

    pub fn membership(&self, place_id: &str) -> Membership {
        self.state.borrow().membership(place_id)
    }

    /// Receiver notified after the load and after every committed mutation.
    pub fn subscribe(&self) -> watch::Receiver<RestaurantLists> {
        self.state.subscribe()
    }

    /// Append `record` to `list`, replacing any record with the same id.
    pub async fn add(&self, list: ListName, record: RestaurantRecord) -> Result<(), ListStoreError> {
        tracing::debug!(list = %list, place_id = %record.place_id, "Adding restaurant");
        self.mutate("add", |lists| (lists.with_added(list, record), ()))
            .await
    }

    /// Remove the record with `place_id` from `list`.
    ///
    /// Returns whether a record was there. The snapshot is written either way.
    pub async fn remove(&self, list: ListName, place_id: &str) -> Result<bool, ListStoreError> {
        tracing::debug!(list = %list, place_id = %place_id, "Removing restaurant");
        self.mutate("remove", |lists| {
            let present = lists.contains(list, place_id);
            (lists.with_removed(list, place_id), present)
        })
        .await
    }

    /// Remove `record` from `list` if present, add it otherwise.
    ///
    /// The decision is taken against the snapshot the mutation starts from,
    /// so two quick toggles always cancel out.
    pub async fn toggle(
        &self,
        list: ListName,
        record: RestaurantRecord,
    ) -> Result<ToggleOutcome, ListStoreError> {
        self.mutate("toggle", |lists| {
            if lists.contains(list, record.place_id.as_str()) {
                let next = lists.with_removed(list, record.place_id.as_str());
                (next, ToggleOutcome::Removed)
            } else {
                (lists.with_added(list, record), ToggleOutcome::Added)
            }
        })
        .await
    }

    /// Empty both lists.
    pub async fn clear_all(&self) -> Result<(), ListStoreError> {
        self.mutate("clear_all", |_| (RestaurantLists::new(), ()))
            .await
    }

    async fn load_locked(&self) -> LoadOutcome {
        if self.is_ready() {
            return LoadOutcome::AlreadyLoaded;
        }
        self.phase.send_replace(LoadPhase::Loading);

        let outcome = match self.storage.load(&self.key).await {
            Ok(None) => LoadOutcome::Empty,
            Ok(Some(raw)) if raw.trim().is_empty() => LoadOutcome::Empty,
            Ok(Some(raw)) => match serde_json::from_str::<RestaurantLists>(&raw) {
                Ok(lists) => {
                    let lists = lists.normalized();
                    let outcome = LoadOutcome::Restored {
                        favorites: lists.len(ListName::Favorites),
                        to_visit: lists.len(ListName::ToVisit),
                    };
                    self.state.send_replace(lists);
                    outcome
                }
                Err(e) => {
                    tracing::warn!(key = %self.key, error = %e, "Saved restaurant lists are malformed, starting empty");
                    LoadOutcome::Recovered {
                        reason: e.to_string(),
                    }
                }
            },
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read restaurant lists, starting empty");
                LoadOutcome::Recovered {
                    reason: e.to_string(),
                }
            }
        };

        self.phase.send_replace(LoadPhase::Ready);
        tracing::debug!(key = %self.key, outcome = ?outcome, "Restaurant lists loaded");
        outcome
    }

    async fn mutate<T, F>(&self, operation: &'static str, change: F) -> Result<T, ListStoreError>
    where
        F: FnOnce(&RestaurantLists) -> (RestaurantLists, T),
    {
        let _guard = self.mutations.lock().await;
        // A mutation that beats the startup load must not be overwritten by it.
        self.load_locked().await;

        let current = self.snapshot();
        let (next, result) = change(&current);

        let json = serde_json::to_string(&next)
            .map_err(|e| ListStoreError::Serialization(e.to_string()))?;

        if let Err(e) = self.storage.save(&self.key, &json).await {
            tracing::error!(key = %self.key, operation, error = %e, "Failed to persist restaurant lists");
            return Err(e.into());
        }

        tracing::debug!(
            key = %self.key,
            operation,
            favorites = next.len(ListName::Favorites),
            to_visit = next.len(ListName::ToVisit),
            "Restaurant lists committed"
        );
        self.state.send_replace(next);
        Ok(result)
    }
}
