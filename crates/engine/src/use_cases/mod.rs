//! Use cases - User story orchestration.
//!
//! Each module covers one screen's worth of behavior on top of the
//! `ListStore`.

pub mod explore;
pub mod lists;

pub use explore::{ExploreError, ExploreSession, ExploreUpdate};
pub use lists::{ListBrowser, ListView};
