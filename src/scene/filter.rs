//! Multi-attribute visibility predicate

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::Location;

/// Visibility conditions applied per location.
///
/// An immutable value built by the filtering UI; it holds no state of its own
/// and only reads the location, so it can be evaluated in any order across a
/// map's members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneFilter {
    pub min_depth: i32,
    pub max_depth: i32,
    /// Categories to include, matched against the defaulted category
    pub categories: HashSet<String>,
    /// Show locations marked done
    pub include_done: bool,
    /// Show only locations flagged as beacons
    pub beacons_only: bool,
}

impl SceneFilter {
    /// Conjunction of the four visibility conditions; all must hold.
    pub fn is_visible(&self, location: &Location) -> bool {
        // Depth within the min/max limits
        let in_range = self.min_depth <= location.depth() && location.depth() <= self.max_depth;

        // Category is among the included ones
        let in_category = self.categories.contains(location.category());

        // Locations marked done are hidden unless explicitly included
        let done_allowed = !(location.done && !self.include_done);

        // In beacons-only mode, only beacon-flagged locations pass
        let beacon_allowed = !(!location.beacon && self.beacons_only);

        in_range && in_category && done_allowed && beacon_allowed
    }
}
