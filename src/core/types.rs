//! Core data types for the observation map

use std::fmt;

use serde::{Deserialize, Serialize};

/// Planar position of a projected observation, in map units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanarPoint {
    pub x: i64,
    pub y: i64,
}

/// Minimal axis-aligned bounding box over the members of a map, in projected
/// x/y and raw depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extents {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
    pub min_depth: i32,
    pub max_depth: i32,
}

impl Extents {
    /// Degenerate value reported for an empty map. Callers cannot distinguish
    /// an empty map from one whose members all sit at the origin at depth 0.
    pub const ZERO: Self = Self {
        min_x: 0,
        max_x: 0,
        min_y: 0,
        max_y: 0,
        min_depth: 0,
        max_depth: 0,
    };
}

/// Opaque identity of a location within its owning map.
///
/// Handed out on insertion; stays valid until the location is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(pub(crate) u64);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
