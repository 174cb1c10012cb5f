//! restolist domain types.
//!
//! Restaurant records, the two saved lists, and the rules that keep them
//! consistent. No I/O lives here.

extern crate self as restolist_domain;

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::RestaurantRecord;
pub use error::DomainError;
pub use ids::PlaceId;
pub use value_objects::{ListName, Membership, MembershipBadge, RestaurantLists};
