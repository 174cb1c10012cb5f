//! End-to-end tests.
//!
//! These build a complete `App` on `FileStorage` in a temp directory and
//! drive it the way the binary does, including restarting the process by
//! building a second `App` on the same file.
//!
//! ```bash
//! cargo test -p restolist-engine --lib e2e_tests
//! ```

mod e2e_helpers;

pub use e2e_helpers::*;
