//! Message types exchanged with the embedded map page.
//!
//! The map page (driving the third-party places provider) posts
//! [`BridgeMessage`]s to the native side; the native side answers with
//! [`NativeMessage`]s. Both are JSON objects tagged by `type`.
//!
//! ## Versioning Policy
//!
//! - New variants can be added at the end (forward compatible)
//! - Unknown `type` values deserialize to `Unknown`

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;
use crate::place::RawPlace;

/// Edges of a bounds change smaller than this (in degrees) are noise.
pub const BOUNDS_TOLERANCE_DEG: f64 = 0.01;

/// Visible map area in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl MapBounds {
    /// Whether any edge moved by more than `tolerance` degrees.
    pub fn differs_from(&self, other: &MapBounds, tolerance: f64) -> bool {
        (self.north - other.north).abs() > tolerance
            || (self.south - other.south).abs() > tolerance
            || (self.east - other.east).abs() > tolerance
            || (self.west - other.west).abs() > tolerance
    }
}

// =============================================================================
// Bridge Messages (map page → native)
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BridgeMessage {
    /// The user panned or zoomed the map.
    BoundsChanged { bounds: MapBounds },
    /// Number of restaurant markers currently on the map.
    RestaurantCount { count: u32 },
    /// A marker was tapped; carries the summary the search returned.
    RestaurantSelected { restaurant: RawPlace },
    /// Full set of restaurants found in the visible area.
    RestaurantsLoaded {
        #[serde(default)]
        restaurants: Vec<RawPlace>,
    },
    /// Detail lookup for a tapped marker finished.
    RestaurantDetails { restaurant: RawPlace },
    #[serde(other)]
    Unknown,
}

impl BridgeMessage {
    /// Decode one message posted by the map page.
    pub fn parse(text: &str) -> Result<Self, BridgeError> {
        serde_json::from_str(text).map_err(BridgeError::malformed)
    }
}

// =============================================================================
// Native Messages (native → map page)
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NativeMessage {
    /// Ask the page to re-run the nearby search for the visible area.
    ReloadMarkers,
}

impl NativeMessage {
    pub fn to_json(&self) -> Result<String, BridgeError> {
        serde_json::to_string(self).map_err(BridgeError::serialization)
    }
}
