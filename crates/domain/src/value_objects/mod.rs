//! Value objects - Immutable objects defined by their attributes

mod lists;
mod membership;

pub use lists::{ListName, RestaurantLists};
pub use membership::{Membership, MembershipBadge};
