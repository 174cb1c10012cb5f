//! restolist engine library.
//!
//! ## Structure
//!
//! - `infrastructure/` - storage port and adapters, config, bridge translation
//! - `stores/` - the `ListStore` owning both saved lists
//! - `use_cases/` - explore session and list browsing on top of the store
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

/// Test fixtures module for integration testing.
#[cfg(test)]
pub mod test_fixtures;

/// End-to-end tests over real file storage in temp directories.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
