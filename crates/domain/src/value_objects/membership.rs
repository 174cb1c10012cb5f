//! Which lists a place belongs to, and the badge shown for it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub in_favorites: bool,
    pub in_to_visit: bool,
}

/// Badge state for a restaurant's list action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipBadge {
    Both,
    Favorite,
    ToVisit,
    None,
}

impl Membership {
    pub fn badge(&self) -> MembershipBadge {
        match (self.in_favorites, self.in_to_visit) {
            (true, true) => MembershipBadge::Both,
            (true, false) => MembershipBadge::Favorite,
            (false, true) => MembershipBadge::ToVisit,
            (false, false) => MembershipBadge::None,
        }
    }

    pub fn is_saved(&self) -> bool {
        self.in_favorites || self.in_to_visit
    }
}

impl MembershipBadge {
    /// Accessibility label for the badge.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Both => "In both lists",
            Self::Favorite => "In favorites",
            Self::ToVisit => "To visit",
            Self::None => "Add to list",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Both | Self::Favorite => '★',
            Self::ToVisit => '✓',
            Self::None => '+',
        }
    }
}
