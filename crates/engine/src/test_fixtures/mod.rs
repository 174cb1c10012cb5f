//! Test fixtures loader for JSON fixture files and common test helpers.
//!
//! Fixture files live under `test_data/` in this crate:
//!
//! - `lists/` - persisted list snapshots, current and legacy field names
//! - `bridge/` - recorded map page message streams, one JSON message per line

use std::path::PathBuf;

use restolist_domain::{RestaurantLists, RestaurantRecord};

fn fixture_path(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(path)
}

/// Read a fixture file verbatim.
///
/// # Panics
///
/// Panics if the fixture file cannot be read.
pub fn read_fixture(path: &str) -> String {
    let path = fixture_path(path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture '{}': {}", path.display(), e))
}

/// Load a JSON fixture from the test_data/ directory.
///
/// # Panics
///
/// Panics if the fixture file cannot be read or parsed.
pub fn load_fixture<T: serde::de::DeserializeOwned>(path: &str) -> T {
    serde_json::from_str(&read_fixture(path))
        .unwrap_or_else(|e| panic!("Failed to parse fixture '{}': {}", path, e))
}

/// Non-empty lines of a JSON-lines fixture.
pub fn fixture_lines(path: &str) -> Vec<String> {
    read_fixture(path)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Snapshot with two favorites and two to-visit entries, one shared.
pub fn saved_lists() -> RestaurantLists {
    load_fixture("lists/saved_lists.json")
}

/// A rated restaurant with id `p1` and no contact details.
pub fn cafe_a() -> RestaurantRecord {
    RestaurantRecord::new("p1", "Cafe A", 4.5)
}

pub fn record(place_id: &str, name: &str) -> RestaurantRecord {
    RestaurantRecord::new(place_id, name, 4.0)
}
