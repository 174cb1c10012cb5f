use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// External place identifier issued by the places provider.
///
/// Opaque to us; the only equality key for list membership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(String);

impl PlaceId {
    /// Wraps a raw identifier without checking it.
    ///
    /// Persisted snapshots go through here: records already saved are
    /// accepted as-is.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Builds an identifier from untrusted input, trimming it and
    /// rejecting blank values.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match crate::common::none_if_blank(value) {
            Some(trimmed) => Ok(Self(trimmed.to_string())),
            None => Err(DomainError::invalid_id("place id cannot be blank")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlaceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlaceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PlaceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for PlaceId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PlaceId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_input() {
        let id = PlaceId::parse("  ChIJ123 ").unwrap();
        assert_eq!(id.as_str(), "ChIJ123");
    }

    #[test]
    fn parse_rejects_blank() {
        assert!(matches!(
            PlaceId::parse("   "),
            Err(DomainError::InvalidId(_))
        ));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = PlaceId::new("p1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"p1\"");
        let back: PlaceId = serde_json::from_str("\"p1\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn compares_with_str() {
        let id = PlaceId::new("p1");
        assert!(id == "p1");
        assert_eq!(id.to_string(), "p1");
    }
}
