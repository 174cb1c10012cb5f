//! The two saved restaurant lists.
//!
//! `RestaurantLists` is the full snapshot that gets persisted. Every
//! operation here is pure: mutations return the next snapshot and leave
//! `self` untouched, so a caller can write the next state durably before
//! adopting it.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::{normalize_rating, RestaurantRecord};
use crate::error::DomainError;
use crate::value_objects::Membership;

/// Which of the two lists an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListName {
    Favorites,
    ToVisit,
}

impl ListName {
    pub const ALL: [ListName; 2] = [ListName::Favorites, ListName::ToVisit];

    /// Key used in the persisted snapshot.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Favorites => "favorites",
            Self::ToVisit => "toVisit",
        }
    }

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Favorites => "Favorites",
            Self::ToVisit => "To Visit",
        }
    }
}

impl fmt::Display for ListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "favorites" | "favourites" | "favoritos" => Ok(Self::Favorites),
            "tovisit" | "to-visit" | "to_visit" | "porvisitar" => Ok(Self::ToVisit),
            other => Err(DomainError::parse(format!("Unknown list: {}", other))),
        }
    }
}

/// Snapshot of both lists.
///
/// Invariant: within one list no two records share a `placeId`. The two
/// lists are independent of each other. Reading goes through
/// [`StoredLists`], so old snapshots load too.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredLists")]
pub struct RestaurantLists {
    favorites: Vec<RestaurantRecord>,
    to_visit: Vec<RestaurantRecord>,
}

/// Persisted shape as read, current and legacy field names side by side.
///
/// Snapshots written by older releases use `favoritos`/`porVisitar`. When
/// both spellings are present the legacy entries come first, so on a
/// duplicate `placeId` the current-name entry wins.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredLists {
    #[serde(default)]
    favorites: Vec<RestaurantRecord>,
    #[serde(default)]
    to_visit: Vec<RestaurantRecord>,
    #[serde(default)]
    favoritos: Vec<RestaurantRecord>,
    #[serde(default)]
    por_visitar: Vec<RestaurantRecord>,
}

impl From<StoredLists> for RestaurantLists {
    fn from(stored: StoredLists) -> Self {
        let StoredLists {
            favorites,
            to_visit,
            mut favoritos,
            mut por_visitar,
        } = stored;
        favoritos.extend(favorites);
        por_visitar.extend(to_visit);
        Self::from_parts(favoritos, por_visitar)
    }
}

impl RestaurantLists {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot from raw vectors, enforcing the uniqueness invariant.
    pub fn from_parts(favorites: Vec<RestaurantRecord>, to_visit: Vec<RestaurantRecord>) -> Self {
        Self {
            favorites,
            to_visit,
        }
        .normalized()
    }

    pub fn favorites(&self) -> &[RestaurantRecord] {
        &self.favorites
    }

    pub fn to_visit(&self) -> &[RestaurantRecord] {
        &self.to_visit
    }

    pub fn get(&self, list: ListName) -> &[RestaurantRecord] {
        match list {
            ListName::Favorites => &self.favorites,
            ListName::ToVisit => &self.to_visit,
        }
    }

    fn get_mut(&mut self, list: ListName) -> &mut Vec<RestaurantRecord> {
        match list {
            ListName::Favorites => &mut self.favorites,
            ListName::ToVisit => &mut self.to_visit,
        }
    }

    pub fn len(&self, list: ListName) -> usize {
        self.get(list).len()
    }

    /// True when both lists are empty.
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty() && self.to_visit.is_empty()
    }

    pub fn contains(&self, list: ListName, place_id: &str) -> bool {
        self.get(list).iter().any(|r| r.place_id == place_id)
    }

    pub fn find(&self, list: ListName, place_id: &str) -> Option<&RestaurantRecord> {
        self.get(list).iter().find(|r| r.place_id == place_id)
    }

    pub fn membership(&self, place_id: &str) -> Membership {
        Membership {
            in_favorites: self.contains(ListName::Favorites, place_id),
            in_to_visit: self.contains(ListName::ToVisit, place_id),
        }
    }

    /// Next snapshot with `record` appended to `list`.
    ///
    /// Any earlier record with the same `placeId` is dropped first, so a
    /// re-added place moves to the end.
    pub fn with_added(&self, list: ListName, record: RestaurantRecord) -> Self {
        let mut next = self.clone();
        let entries = next.get_mut(list);
        entries.retain(|r| r.place_id != record.place_id);
        entries.push(record.with_normalized_rating());
        next
    }

    /// Next snapshot without any record matching `place_id` in `list`.
    pub fn with_removed(&self, list: ListName, place_id: &str) -> Self {
        let mut next = self.clone();
        next.get_mut(list).retain(|r| r.place_id != place_id);
        next
    }

    /// Records of `list` whose name or address contains `query`,
    /// ignoring case. A blank query returns the whole list.
    pub fn search(&self, list: ListName, query: &str) -> Vec<&RestaurantRecord> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.get(list).iter().collect();
        }
        self.get(list)
            .iter()
            .filter(|r| r.matches_query(&needle))
            .collect()
    }

    /// Restores the uniqueness invariant on data that didn't come through
    /// `with_added`, e.g. a hand-edited snapshot. For duplicates the last
    /// occurrence wins, matching append-replace semantics. Unusable
    /// ratings become `0.0`.
    pub fn normalized(mut self) -> Self {
        for list in ListName::ALL {
            let entries = self.get_mut(list);
            dedup_keep_last(entries);
            for record in entries.iter_mut() {
                record.rating = normalize_rating(record.rating);
            }
        }
        self
    }
}

fn dedup_keep_last(entries: &mut Vec<RestaurantRecord>) {
    let mut seen = HashSet::new();
    let mut kept: Vec<RestaurantRecord> = entries
        .drain(..)
        .rev()
        .filter(|r| seen.insert(r.place_id.clone()))
        .collect();
    kept.reverse();
    *entries = kept;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str) -> RestaurantRecord {
        RestaurantRecord::new(id, name, 4.0)
    }

    fn ids(lists: &RestaurantLists, list: ListName) -> Vec<&str> {
        lists.get(list).iter().map(|r| r.place_id.as_str()).collect()
    }

    #[test]
    fn add_appends_in_order() {
        let lists = RestaurantLists::new()
            .with_added(ListName::Favorites, record("1", "A"))
            .with_added(ListName::Favorites, record("2", "B"));

        assert_eq!(ids(&lists, ListName::Favorites), vec!["1", "2"]);
    }

    #[test]
    fn re_adding_moves_record_to_end_and_replaces_it() {
        let lists = RestaurantLists::new()
            .with_added(ListName::Favorites, record("1", "A"))
            .with_added(ListName::Favorites, record("2", "B"))
            .with_added(ListName::Favorites, record("1", "C"));

        assert_eq!(ids(&lists, ListName::Favorites), vec!["2", "1"]);
        assert_eq!(lists.favorites()[1].name, "C");
    }

    #[test]
    fn repeated_adds_keep_place_ids_unique() {
        let mut lists = RestaurantLists::new();
        for (i, id) in ["a", "b", "a", "c", "b", "a"].iter().enumerate() {
            lists = lists.with_added(ListName::ToVisit, record(id, &format!("n{}", i)));
        }

        let mut seen = HashSet::new();
        assert!(lists.to_visit().iter().all(|r| seen.insert(r.place_id.clone())));
        assert_eq!(ids(&lists, ListName::ToVisit), vec!["c", "b", "a"]);
    }

    #[test]
    fn with_added_leaves_original_untouched() {
        let original = RestaurantLists::new();
        let next = original.with_added(ListName::Favorites, record("1", "A"));

        assert!(original.is_empty());
        assert!(next.contains(ListName::Favorites, "1"));
    }

    #[test]
    fn remove_filters_matching_place() {
        let lists = RestaurantLists::new()
            .with_added(ListName::Favorites, record("1", "A"))
            .with_added(ListName::Favorites, record("2", "B"))
            .with_removed(ListName::Favorites, "1");

        assert_eq!(ids(&lists, ListName::Favorites), vec!["2"]);
    }

    #[test]
    fn remove_missing_is_noop() {
        let lists = RestaurantLists::new().with_added(ListName::Favorites, record("1", "A"));
        assert_eq!(lists.with_removed(ListName::Favorites, "zzz"), lists);
    }

    #[test]
    fn lists_are_independent() {
        let lists = RestaurantLists::new().with_added(ListName::Favorites, record("1", "A"));

        assert!(lists.contains(ListName::Favorites, "1"));
        assert!(!lists.contains(ListName::ToVisit, "1"));

        let both = lists.with_added(ListName::ToVisit, record("1", "A"));
        let only_to_visit = both.with_removed(ListName::Favorites, "1");
        assert!(only_to_visit.contains(ListName::ToVisit, "1"));
    }

    #[test]
    fn search_matches_name_and_address_case_insensitively() {
        let lists = RestaurantLists::new()
            .with_added(
                ListName::Favorites,
                record("1", "Cafe Central").with_address("Plaza Mayor"),
            )
            .with_added(ListName::Favorites, record("2", "Sushi Bar"));

        let by_name: Vec<_> = lists.search(ListName::Favorites, "SUSHI");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].place_id, "2");

        let by_address = lists.search(ListName::Favorites, "mayor");
        assert_eq!(by_address.len(), 1);
        assert_eq!(by_address[0].place_id, "1");

        assert_eq!(lists.search(ListName::Favorites, "  ").len(), 2);
        assert!(lists.search(ListName::Favorites, "pizza").is_empty());
    }

    #[test]
    fn snapshot_uses_two_named_arrays() {
        let lists = RestaurantLists::new()
            .with_added(ListName::ToVisit, record("1", "A"));
        let json = serde_json::to_value(&lists).unwrap();

        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(json["favorites"], serde_json::json!([]));
        assert_eq!(json["toVisit"][0]["placeId"], "1");
    }

    #[test]
    fn reads_legacy_field_names() {
        let json = r#"{
            "favoritos": [{"placeId": "1", "name": "A", "rating": 4.5}],
            "porVisitar": [{"placeId": "2", "name": "B", "rating": 0}]
        }"#;
        let lists: RestaurantLists = serde_json::from_str(json).unwrap();

        assert!(lists.contains(ListName::Favorites, "1"));
        assert!(lists.contains(ListName::ToVisit, "2"));
    }

    #[test]
    fn normalized_keeps_last_duplicate() {
        let lists = RestaurantLists::from_parts(
            vec![record("1", "old"), record("2", "B"), record("1", "new")],
            vec![],
        );

        assert_eq!(ids(&lists, ListName::Favorites), vec!["2", "1"]);
        assert_eq!(lists.favorites()[1].name, "new");
    }

    #[test]
    fn list_name_parses_aliases() {
        assert_eq!("favorites".parse::<ListName>().unwrap(), ListName::Favorites);
        assert_eq!("to-visit".parse::<ListName>().unwrap(), ListName::ToVisit);
        assert_eq!("toVisit".parse::<ListName>().unwrap(), ListName::ToVisit);
        assert!("wishlist".parse::<ListName>().is_err());
    }

    #[test]
    fn current_and_legacy_names_together_are_merged() {
        let json = r#"{
            "favoritos": [{"placeId": "1", "name": "A old"}, {"placeId": "3", "name": "C"}],
            "favorites": [{"placeId": "1", "name": "A"}, {"placeId": "2", "name": "B"}],
            "porVisitar": [{"placeId": "4", "name": "D"}],
            "toVisit": []
        }"#;
        let lists: RestaurantLists = serde_json::from_str(json).unwrap();

        assert_eq!(ids(&lists, ListName::Favorites), vec!["3", "1", "2"]);
        assert_eq!(lists.find(ListName::Favorites, "1").unwrap().name, "A");
        assert_eq!(ids(&lists, ListName::ToVisit), vec!["4"]);
    }

    #[test]
    fn non_finite_rating_is_stored_as_unrated() {
        let lists = RestaurantLists::new()
            .with_added(ListName::Favorites, RestaurantRecord::new("1", "A", f64::NAN));
        assert_eq!(lists.favorites()[0].rating, 0.0);

        let json = serde_json::to_string(&lists).unwrap();
        let reloaded: RestaurantLists = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, lists);
    }
}
