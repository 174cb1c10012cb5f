//! In-memory state stores.
//!
//! - `ListStore` - the saved restaurant lists, synchronized to durable storage

pub mod list_store;

pub use list_store::{ListStore, ListStoreError, LoadOutcome, LoadPhase, ToggleOutcome};
