//! Port traits for infrastructure boundaries.
//!
//! Durable storage is the only abstraction the engine needs: it can be a
//! JSON file on desktop, the platform's key-value store on device, or an
//! in-memory map in tests.

mod error;
mod storage;

pub use error::StorageError;
pub use storage::{storage_keys, StoragePort};

#[cfg(test)]
pub use storage::MockStoragePort;
