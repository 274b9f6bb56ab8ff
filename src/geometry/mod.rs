//! Pure projection geometry

pub mod projection;

pub use projection::{heading, project, surface_distance};
