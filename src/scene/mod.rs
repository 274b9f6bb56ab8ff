//! Display-side derivation: visibility, color and grid boundaries

pub mod color;
pub mod filter;
pub mod grid;

pub use color::{CategoryStyle, Color, ColorMapper, ColorScheme, DepthScale};
pub use filter::SceneFilter;
pub use grid::{grid_bounds, GridBounds};
