//! Translates `BridgeMessage` from the map page into `BridgeEvent`s.
//!
//! Place payloads arrive loosely typed; this is where they are coerced into
//! domain records. A payload that can't become a record is reported as
//! `Rejected` rather than failing the whole message stream.

use restolist_domain::RestaurantRecord;
use restolist_shared::{BridgeMessage, MapBounds};

/// Application-side view of one bridge message.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeEvent {
    BoundsChanged(MapBounds),
    RestaurantCount(u32),
    RestaurantSelected(RestaurantRecord),
    RestaurantDetails(RestaurantRecord),
    /// Nearby search results. `skipped` counts entries that had no usable
    /// id or name.
    RestaurantsLoaded {
        restaurants: Vec<RestaurantRecord>,
        skipped: usize,
    },
    /// A single-place message whose payload couldn't be coerced.
    Rejected {
        kind: &'static str,
        reason: String,
    },
    /// A message type this build doesn't know.
    Ignored,
}

/// Translate a decoded bridge message.
pub fn translate(msg: BridgeMessage) -> BridgeEvent {
    match msg {
        BridgeMessage::BoundsChanged { bounds } => BridgeEvent::BoundsChanged(bounds),

        BridgeMessage::RestaurantCount { count } => BridgeEvent::RestaurantCount(count),

        BridgeMessage::RestaurantSelected { restaurant } => match restaurant.into_record() {
            Ok(record) => BridgeEvent::RestaurantSelected(record),
            Err(e) => BridgeEvent::Rejected {
                kind: "restaurant_selected",
                reason: e.to_string(),
            },
        },

        BridgeMessage::RestaurantDetails { restaurant } => match restaurant.into_record() {
            Ok(record) => BridgeEvent::RestaurantDetails(record),
            Err(e) => BridgeEvent::Rejected {
                kind: "restaurant_details",
                reason: e.to_string(),
            },
        },

        BridgeMessage::RestaurantsLoaded { restaurants } => {
            let total = restaurants.len();
            let restaurants: Vec<RestaurantRecord> = restaurants
                .into_iter()
                .filter_map(|raw| match raw.into_record() {
                    Ok(record) => Some(record),
                    Err(e) => {
                        tracing::debug!(error = %e, "Skipping nearby restaurant");
                        None
                    }
                })
                .collect();
            let skipped = total - restaurants.len();
            BridgeEvent::RestaurantsLoaded {
                restaurants,
                skipped,
            }
        }

        BridgeMessage::Unknown => BridgeEvent::Ignored,
    }
}
