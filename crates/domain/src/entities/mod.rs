//! Domain entities

mod restaurant;

pub use restaurant::{normalize_rating, RestaurantRecord};
