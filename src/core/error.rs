//! Error taxonomy for map operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::LocationId;

/// Result alias for fallible map operations
pub type MapResult<T> = Result<T, MapError>;

/// Value-level failures local to a single map operation.
///
/// None of these require tearing down the collection or any process-wide
/// state; the failed operation leaves previous state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapError {
    /// Bearing outside the closed 0..=360 degree range
    InvalidAngle { bearing: u16 },
    /// Depth offset larger than the straight-line distance, so no right
    /// triangle exists and the surface distance is undefined
    InvalidTriangle {
        distance: u32,
        depth: i32,
        reference_depth: i32,
    },
    /// The addressed location is not a current member of the collection
    NotFound { id: LocationId },
    /// Category absent from the externally configured category table
    UnknownCategory { category: String },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::InvalidAngle { bearing } => {
                write!(f, "Invalid bearing {}, must be between 0 and 360", bearing)
            }
            MapError::InvalidTriangle {
                distance,
                depth,
                reference_depth,
            } => {
                write!(
                    f,
                    "Invalid triangle: depth offset {} exceeds distance {} (depth {}, reference depth {})",
                    (i64::from(*depth) - i64::from(*reference_depth)).abs(),
                    distance,
                    depth,
                    reference_depth
                )
            }
            MapError::NotFound { id } => {
                write!(f, "No such location in map: {}", id)
            }
            MapError::UnknownCategory { category } => {
                write!(f, "Unknown category '{}' not present in the category table", category)
            }
        }
    }
}

impl std::error::Error for MapError {}
