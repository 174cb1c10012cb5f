//! restolist Protocol - the bridge between the native side and the map page
//!
//! - Message enums for both directions (`BridgeMessage`, `NativeMessage`)
//! - Loosely typed place payloads and their coercion into domain records
//!
//! No business logic lives here beyond validating what crosses the boundary.

pub mod error;
pub mod messages;
pub mod place;

pub use error::BridgeError;
pub use messages::{BridgeMessage, MapBounds, NativeMessage, BOUNDS_TOLERANCE_DEG};
pub use place::RawPlace;
