//! Explore session - folds map page messages into the explore screen state.
//!
//! The map page reports what the places provider found (markers, nearby
//! restaurants, the tapped marker and its details). The session keeps the
//! latest of each and lets the user save the selected restaurant.

use std::sync::Arc;

use restolist_domain::{ListName, Membership, PlaceId, RestaurantRecord};
use restolist_shared::{BridgeError, BridgeMessage, MapBounds, NativeMessage, BOUNDS_TOLERANCE_DEG};

use crate::infrastructure::bridge_translator::{self, BridgeEvent};
use crate::stores::{ListStore, ListStoreError, ToggleOutcome};

#[derive(Debug, thiserror::Error)]
pub enum ExploreError {
    #[error("No restaurant is selected")]
    NoSelection,

    #[error(transparent)]
    Store(#[from] ListStoreError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

/// Effect of one bridge message on the session.
#[derive(Debug, Clone, PartialEq)]
pub enum ExploreUpdate {
    BoundsMoved(MapBounds),
    /// Every edge moved by no more than the tolerance.
    BoundsUnchanged,
    MarkerCount(u32),
    Selected(PlaceId),
    DetailsApplied(PlaceId),
    NearbyLoaded { count: usize, skipped: usize },
    Rejected { kind: &'static str, reason: String },
    Ignored,
}

pub struct ExploreSession {
    store: Arc<ListStore>,
    bounds: Option<MapBounds>,
    marker_count: u32,
    nearby: Vec<RestaurantRecord>,
    selected: Option<RestaurantRecord>,
}

impl ExploreSession {
    pub fn new(store: Arc<ListStore>) -> Self {
        Self {
            store,
            bounds: None,
            marker_count: 0,
            nearby: Vec::new(),
            selected: None,
        }
    }

    pub fn bounds(&self) -> Option<MapBounds> {
        self.bounds
    }

    pub fn marker_count(&self) -> u32 {
        self.marker_count
    }

    pub fn nearby(&self) -> &[RestaurantRecord] {
        &self.nearby
    }

    pub fn selected(&self) -> Option<&RestaurantRecord> {
        self.selected.as_ref()
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Decode and apply one raw message from the map page.
    pub fn handle_message(&mut self, text: &str) -> Result<ExploreUpdate, ExploreError> {
        let message = BridgeMessage::parse(text)?;
        Ok(self.apply(bridge_translator::translate(message)))
    }

    pub fn apply(&mut self, event: BridgeEvent) -> ExploreUpdate {
        match event {
            BridgeEvent::BoundsChanged(bounds) => {
                let moved = self
                    .bounds
                    .map_or(true, |current| current.differs_from(&bounds, BOUNDS_TOLERANCE_DEG));
                if moved {
                    self.bounds = Some(bounds);
                    ExploreUpdate::BoundsMoved(bounds)
                } else {
                    ExploreUpdate::BoundsUnchanged
                }
            }

            BridgeEvent::RestaurantCount(count) => {
                self.marker_count = count;
                ExploreUpdate::MarkerCount(count)
            }

            BridgeEvent::RestaurantSelected(record) => {
                let place_id = record.place_id.clone();
                tracing::debug!(place_id = %place_id, "Restaurant selected");
                self.selected = Some(record);
                ExploreUpdate::Selected(place_id)
            }

            BridgeEvent::RestaurantDetails(record) => {
                let place_id = record.place_id.clone();
                if let Some(entry) = self.nearby.iter_mut().find(|r| r.place_id == place_id) {
                    *entry = record.clone();
                }
                self.selected = Some(record);
                ExploreUpdate::DetailsApplied(place_id)
            }

            BridgeEvent::RestaurantsLoaded {
                restaurants,
                skipped,
            } => {
                self.nearby.clear();
                for record in restaurants {
                    if !self.nearby.iter().any(|r| r.place_id == record.place_id) {
                        self.nearby.push(record);
                    }
                }
                if skipped > 0 {
                    tracing::warn!(skipped, "Ignored nearby restaurants without id or name");
                }
                ExploreUpdate::NearbyLoaded {
                    count: self.nearby.len(),
                    skipped,
                }
            }

            BridgeEvent::Rejected { kind, reason } => {
                tracing::warn!(kind, reason = %reason, "Rejected bridge payload");
                ExploreUpdate::Rejected { kind, reason }
            }

            BridgeEvent::Ignored => {
                tracing::debug!("Ignoring unknown bridge message");
                ExploreUpdate::Ignored
            }
        }
    }

    /// Nearby restaurants whose name or address contains `query`.
    pub fn search(&self, query: &str) -> Vec<&RestaurantRecord> {
        let needle = query.trim().to_lowercase();
        self.nearby
            .iter()
            .filter(|r| needle.is_empty() || r.matches_query(&needle))
            .collect()
    }

    /// Message asking the map page to search the visible area again.
    pub fn reload_request(&self) -> Result<String, ExploreError> {
        Ok(NativeMessage::ReloadMarkers.to_json()?)
    }

    pub fn selected_membership(&self) -> Option<Membership> {
        self.selected
            .as_ref()
            .map(|r| self.store.membership(r.place_id.as_str()))
    }

    /// Toggle the selected restaurant in `list`.
    pub async fn toggle_selected(&self, list: ListName) -> Result<ToggleOutcome, ExploreError> {
        let record = self.selected.clone().ok_or(ExploreError::NoSelection)?;
        Ok(self.store.toggle(list, record).await?)
    }
}
