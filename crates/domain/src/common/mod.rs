//! Common utility functions shared across the restolist crates.
//!
//! Pure functions only: no side effects, no I/O.

pub mod string;

pub use string::{contains_lowercase, none_if_blank};
