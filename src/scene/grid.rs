//! Grid boundary derivation
//!
//! The renderer draws its grid from boundaries aligned outward to whole
//! multiples of the major step, so every member of the map falls inside the
//! outermost lines. Pure functions of the extents; the caller recomputes
//! whenever membership or any member position changes.

use serde::{Deserialize, Serialize};

use crate::core::Extents;

/// Grid boundaries aligned outward to the major step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl GridBounds {
    pub fn width(&self) -> i64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i64 {
        self.max_y - self.min_y
    }

    /// X coordinates of the vertical grid lines at the given step.
    /// `step` must be positive.
    pub fn vertical_lines(&self, step: i64) -> Vec<i64> {
        (self.min_x..=self.max_x).step_by(step as usize).collect()
    }

    /// Y coordinates of the horizontal grid lines at the given step.
    /// `step` must be positive.
    pub fn horizontal_lines(&self, step: i64) -> Vec<i64> {
        (self.min_y..=self.max_y).step_by(step as usize).collect()
    }
}

/// Round the map extents outward to whole multiples of `major_step`: floor
/// for the minima, ceil for the maxima. Euclidean division keeps the
/// alignment correct for negative coordinates. `major_step` must be positive.
pub fn grid_bounds(extents: &Extents, major_step: i64) -> GridBounds {
    GridBounds {
        min_x: floor_to_step(extents.min_x, major_step),
        max_x: ceil_to_step(extents.max_x, major_step),
        min_y: floor_to_step(extents.min_y, major_step),
        max_y: ceil_to_step(extents.max_y, major_step),
    }
}

fn floor_to_step(value: i64, step: i64) -> i64 {
    value.div_euclid(step) * step
}

fn ceil_to_step(value: i64, step: i64) -> i64 {
    let aligned = value.div_euclid(step) * step;
    if aligned == value {
        aligned
    } else {
        aligned + step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extents(min_x: i64, max_x: i64, min_y: i64, max_y: i64) -> Extents {
        Extents {
            min_x,
            max_x,
            min_y,
            max_y,
            min_depth: 0,
            max_depth: 0,
        }
    }

    #[test]
    fn test_bounds_round_outward() {
        // Members at (100, 200) and (-50, 300)
        let bounds = grid_bounds(&extents(-50, 100, 200, 300), 500);
        assert_eq!(
            bounds,
            GridBounds { min_x: -500, max_x: 500, min_y: 0, max_y: 500 }
        );
    }

    #[test]
    fn test_exact_multiples_stay_put() {
        let bounds = grid_bounds(&extents(-200, 400, 0, 600), 100);
        assert_eq!(
            bounds,
            GridBounds { min_x: -200, max_x: 400, min_y: 0, max_y: 600 }
        );
    }

    #[test]
    fn test_negative_coordinates_floor_away_from_zero() {
        let bounds = grid_bounds(&extents(-101, -99, -1, 1), 100);
        assert_eq!(bounds.min_x, -200);
        assert_eq!(bounds.max_x, 0);
        assert_eq!(bounds.min_y, -100);
        assert_eq!(bounds.max_y, 100);
    }

    #[test]
    fn test_degenerate_extents_collapse_to_origin() {
        let bounds = grid_bounds(&Extents::ZERO, 100);
        assert_eq!(bounds, GridBounds { min_x: 0, max_x: 0, min_y: 0, max_y: 0 });
        assert_eq!(bounds.width(), 0);
        assert_eq!(bounds.height(), 0);
    }

    #[test]
    fn test_line_positions() {
        let bounds = grid_bounds(&extents(-50, 100, 0, 100), 100);
        assert_eq!(bounds.vertical_lines(100), vec![-100, 0, 100]);
        assert_eq!(bounds.horizontal_lines(50), vec![0, 50, 100]);
        // Minor lines cover the same span at a finer step
        assert_eq!(bounds.vertical_lines(50), vec![-100, -50, 0, 50, 100]);
    }

    #[test]
    fn test_width_and_height() {
        let bounds = grid_bounds(&extents(-50, 100, 200, 300), 500);
        assert_eq!(bounds.width(), 1000);
        assert_eq!(bounds.height(), 500);
    }
}
