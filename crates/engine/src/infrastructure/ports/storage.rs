//! Durable key-value storage port.

use async_trait::async_trait;

use super::error::StorageError;

/// Persistent key-value storage (file-based on desktop, in-memory in tests).
///
/// Values are opaque strings written and read whole. A `save` that returns
/// `Ok` is durable; one that returns `Err` changed nothing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoragePort: Send + Sync {
    /// Load a value by key, `None` if nothing was ever saved under it.
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Save a value under the given key, replacing any previous value.
    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Storage key constants
///
/// Part of the storage contract: data written under these keys must stay
/// readable across releases.
pub mod storage_keys {
    /// Both saved restaurant lists, as one JSON snapshot.
    pub const RESTAURANT_LISTS: &str = "restaurant_lists";
}
