//! Restaurant record entity

use serde::{Deserialize, Serialize};

use crate::ids::PlaceId;

/// Snapshot of a restaurant's key attributes at the time it was saved.
///
/// Records are denormalized: nothing is refreshed from the places provider
/// after a record lands in a list. `rating == 0.0` means the provider had
/// no rating, not a measured zero.
///
/// Persisted field names are camelCase (`placeId`, ...); absent optional
/// fields are omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRecord {
    pub place_id: PlaceId,
    #[serde(default)]
    pub name: String,
    #[serde(default, with = "stored_rating")]
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl RestaurantRecord {
    pub fn new(place_id: impl Into<PlaceId>, name: impl Into<String>, rating: f64) -> Self {
        Self {
            place_id: place_id.into(),
            name: name.into(),
            rating,
            address: None,
            phone: None,
            website: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    /// Same record with its rating passed through [`normalize_rating`].
    pub fn with_normalized_rating(mut self) -> Self {
        self.rating = normalize_rating(self.rating);
        self
    }

    pub fn place_id(&self) -> &PlaceId {
        &self.place_id
    }

    /// Whether the provider reported a rating for this place.
    pub fn has_rating(&self) -> bool {
        self.rating > 0.0
    }

    /// `tel:` URI for the phone number, always in international form.
    ///
    /// Visual separators (spaces, dashes, dots, parentheses) are dropped and
    /// a `+` is prepended when the number doesn't already carry one.
    pub fn dial_uri(&self) -> Option<String> {
        let phone = self.phone.as_deref()?;
        let compact: String = phone
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '.' | '(' | ')'))
            .collect();

        match compact.strip_prefix('+') {
            Some("") => None,
            Some(_) => Some(format!("tel:{}", compact)),
            None if compact.is_empty() => None,
            None => Some(format!("tel:+{}", compact)),
        }
    }

    pub fn website_url(&self) -> Option<&str> {
        self.website.as_deref().filter(|w| !w.trim().is_empty())
    }

    /// Case-insensitive match on name or address. `needle` must be lowercase.
    pub fn matches_query(&self, needle: &str) -> bool {
        crate::common::contains_lowercase(&self.name, needle)
            || self
                .address
                .as_deref()
                .is_some_and(|address| crate::common::contains_lowercase(address, needle))
    }
}

/// `rating` if it is a finite positive number, otherwise `0.0` (unrated).
pub fn normalize_rating(rating: f64) -> f64 {
    if rating.is_finite() && rating > 0.0 {
        rating
    } else {
        0.0
    }
}

/// Lenient rating (de)serialization.
///
/// JSON has no NaN or infinity: both are written as `null` by serializers,
/// including the one that wrote older snapshots. Anything that isn't a
/// usable number reads back as unrated instead of failing the snapshot.
mod stored_rating {
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::normalize_rating;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StoredRating {
        Number(f64),
        Text(String),
        #[allow(dead_code)]
        Other(IgnoredAny),
    }

    pub fn serialize<S: Serializer>(rating: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(normalize_rating(*rating))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let rating = match Option::<StoredRating>::deserialize(deserializer)? {
            Some(StoredRating::Number(n)) => n,
            Some(StoredRating::Text(s)) => s.trim().parse().unwrap_or(0.0),
            Some(StoredRating::Other(_)) | None => 0.0,
        };
        Ok(normalize_rating(rating))
    }
}
