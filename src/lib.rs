//! Polar observation mapping
//!
//! Projects field observations recorded as (distance, bearing, depth) relative
//! to a fixed reference point onto a planar grid, and maintains a mutable
//! collection of such observations with aggregate extents, visibility
//! filtering and display color derivation for an external renderer.

pub mod core;
pub mod geometry;
pub mod model;
pub mod scene;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{Extents, LocationId, MapError, MapResult, PlanarPoint};
pub use crate::core::{DEFAULT_CATEGORY, DEFAULT_NAME};
pub use geometry::projection::{heading, project, surface_distance};
pub use model::{Location, LocationMap};
pub use scene::color::{CategoryStyle, Color, ColorMapper, ColorScheme, DepthScale};
pub use scene::filter::SceneFilter;
pub use scene::grid::{grid_bounds, GridBounds};
pub use storage::records::{LocationRecord, MapDocument, MapSettings, StorageError};
pub use utils::config::{ConfigError, MapConfig};
