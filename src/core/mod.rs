//! Core types, constants and the error taxonomy for the observation map

pub mod constants;
pub mod error;
pub mod types;

pub use constants::*;
pub use error::{MapError, MapResult};
pub use types::{Extents, LocationId, PlanarPoint};
