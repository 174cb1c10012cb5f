//! Raw place payloads and their coercion into domain records.
//!
//! The map page builds these objects from whatever the places provider
//! returned, so every field is optional and loosely typed here. Nothing
//! untyped gets past [`RawPlace::into_record`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use restolist_domain::common::none_if_blank;
use restolist_domain::entities::normalize_rating;
use restolist_domain::{PlaceId, RestaurantRecord};

use crate::error::BridgeError;

/// Restaurant-shaped object as posted by the map page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlace {
    #[serde(default, alias = "place_id")]
    pub place_id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub rating: Option<Value>,
    #[serde(default)]
    pub address: Option<Value>,
    #[serde(default)]
    pub phone: Option<Value>,
    #[serde(default)]
    pub website: Option<Value>,
}

impl RawPlace {
    /// Validates and coerces the payload.
    ///
    /// - `placeId` and `name` are required and must be non-blank.
    /// - `rating` falls back to `0` (unrated) when missing, non-numeric,
    ///   negative or non-finite; numeric strings are accepted.
    /// - Optional strings are trimmed; blank or non-string values are dropped.
    pub fn into_record(self) -> Result<RestaurantRecord, BridgeError> {
        let place_id = match self.place_id.as_ref().and_then(scalar_text) {
            Some(raw) => PlaceId::parse(&raw).map_err(|_| BridgeError::invalid_place("placeId"))?,
            None => return Err(BridgeError::invalid_place("placeId")),
        };

        let name = self
            .name
            .as_ref()
            .and_then(text)
            .ok_or_else(|| BridgeError::invalid_place("name"))?;

        Ok(RestaurantRecord {
            place_id,
            name,
            rating: self.rating.as_ref().map(coerce_rating).unwrap_or(0.0),
            address: self.address.as_ref().and_then(text),
            phone: self.phone.as_ref().and_then(text),
            website: self.website.as_ref().and_then(text),
        })
    }
}

impl From<&RestaurantRecord> for RawPlace {
    fn from(record: &RestaurantRecord) -> Self {
        Self {
            place_id: Some(Value::String(record.place_id.to_string())),
            name: Some(Value::String(record.name.clone())),
            rating: serde_json::Number::from_f64(record.rating).map(Value::Number),
            address: record.address.clone().map(Value::String),
            phone: record.phone.clone().map(Value::String),
            website: record.website.clone().map(Value::String),
        }
    }
}

fn text(value: &Value) -> Option<String> {
    value.as_str().and_then(none_if_blank).map(str::to_string)
}

/// Identifiers sometimes arrive as numbers; accept both.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => none_if_blank(s).map(str::to_string),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn coerce_rating(value: &Value) -> f64 {
    let rating = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    rating.map(normalize_rating).unwrap_or(0.0)
}
