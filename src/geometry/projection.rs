//! Polar-to-planar projection
//!
//! An observation records the straight-line distance to a fixed reference
//! point, the compass bearing from the observation *to* that point, and the
//! observation depth. The projector decomposes the distance/depth right
//! triangle (the distance is the hypotenuse, the depth offset the vertical
//! leg) and drops the observation onto the horizontal plane of the reference
//! point.
//!
//! All rounding uses `f64::round`, half away from zero, applied once to the
//! surface distance and once to each planar component.

use nalgebra::Vector2;

use crate::core::{MapError, MapResult, PlanarPoint};

/// Reciprocal of the recorded bearing: the angle from the reference point to
/// the observation, in `[0, 360)`.
pub fn heading(bearing: u16) -> u16 {
    (i32::from(bearing) - 180).rem_euclid(360) as u16
}

/// Adjacent side of a right triangle given the hypotenuse and opposite side.
///
/// Callers must have checked `|opposite| <= hypotenuse`; the clamp only guards
/// float noise when the two are equal.
pub(crate) fn adjacent_side(hypotenuse: f64, opposite: f64) -> f64 {
    (hypotenuse * hypotenuse - opposite * opposite).max(0.0).sqrt()
}

/// Horizontal leg of the distance/depth right triangle, rounded.
///
/// Fails with `InvalidTriangle` when the depth offset exceeds the distance.
pub fn surface_distance(distance: u32, depth: i32, reference_depth: i32) -> MapResult<u32> {
    let vertical = i64::from(depth) - i64::from(reference_depth);
    if vertical.unsigned_abs() > u64::from(distance) {
        return Err(MapError::InvalidTriangle {
            distance,
            depth,
            reference_depth,
        });
    }
    Ok(adjacent_side(f64::from(distance), vertical as f64).round() as u32)
}

/// Rotate a surface distance through a heading into planar coordinates.
///
/// The y component is negated so that a northward heading renders upward on a
/// screen whose y axis grows downward.
pub(crate) fn planar_offset(heading_deg: u16, surface: u32) -> PlanarPoint {
    let theta = f64::from(heading_deg).to_radians();
    let offset = Vector2::new(theta.sin(), -theta.cos()) * f64::from(surface);
    PlanarPoint {
        x: offset.x.round() as i64,
        y: offset.y.round() as i64,
    }
}

/// Project a raw observation onto the reference plane.
///
/// Validates the bearing range and the triangle inequality before computing
/// anything. Pure and deterministic; identical inputs always produce the same
/// point.
pub fn project(distance: u32, bearing: u16, depth: i32, reference_depth: i32) -> MapResult<PlanarPoint> {
    if bearing > 360 {
        return Err(MapError::InvalidAngle { bearing });
    }
    let surface = surface_distance(distance, depth, reference_depth)?;
    Ok(planar_offset(heading(bearing), surface))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_is_reciprocal_bearing() {
        assert_eq!(heading(0), 180);
        assert_eq!(heading(180), 0);
        assert_eq!(heading(60), 240);
        assert_eq!(heading(360), 180);

        // Normalized into [0, 360) across the whole legal input range
        for bearing in 0..=360u16 {
            let h = heading(bearing);
            assert!(h < 360, "heading({}) = {} out of range", bearing, h);
            assert_eq!(i32::from(h), (i32::from(bearing) - 180).rem_euclid(360));
        }
    }

    #[test]
    fn test_surface_distance_right_triangle() {
        // 555-333-444 triple, offset reference both ways
        assert_eq!(surface_distance(555, 433, 100).unwrap(), 444);
        assert_eq!(surface_distance(555, 233, -100).unwrap(), 444);
        assert_eq!(surface_distance(555, 333, 0).unwrap(), 444);

        // Vertical observation: surface distance collapses to zero
        assert_eq!(surface_distance(100, 100, 0).unwrap(), 0);
        assert_eq!(surface_distance(100, -100, 0).unwrap(), 0);
    }

    #[test]
    fn test_triangle_validity_boundary() {
        // |depth - reference| == distance is the last valid input
        let point = project(100, 0, 100, 0).unwrap();
        assert_eq!(point, PlanarPoint { x: 0, y: 0 });

        // One past the boundary fails
        let result = project(100, 0, 101, 0);
        assert_eq!(
            result,
            Err(MapError::InvalidTriangle {
                distance: 100,
                depth: 101,
                reference_depth: 0,
            })
        );

        // Same check guards the negative side
        assert!(project(100, 0, -101, 0).is_err());
        assert!(project(0, 0, 10, 0).is_err());
    }

    #[test]
    fn test_invalid_bearing_rejected() {
        assert_eq!(
            project(100, 361, 0, 0),
            Err(MapError::InvalidAngle { bearing: 361 })
        );
        // Both endpoints are legal
        assert!(project(100, 0, 0, 0).is_ok());
        assert!(project(100, 360, 0, 0).is_ok());
    }

    #[test]
    fn test_projection_due_north_bearing() {
        // Bearing 0 means the reference is due north of the observation, so
        // the observation sits due south: x = 0, y positive (screen down).
        let point = project(555, 0, 433, 100).unwrap();
        assert_eq!(point, PlanarPoint { x: 0, y: 444 });
    }

    #[test]
    fn test_projection_oblique_bearing() {
        // heading = (60 - 180) mod 360 = 240; surface = 444.
        // x = round(sin(240) * 444) = round(-384.52) = -385
        // y = round(-cos(240) * 444) = round(222.0) = 222
        let point = project(555, 60, 333, 0).unwrap();
        assert_eq!(point, PlanarPoint { x: -385, y: 222 });
    }

    #[test]
    fn test_diagonal_bearings_are_symmetric() {
        // 45-degree bearings land on the diagonals, so |x| == |y|
        let cases = [(555u32, 333i32), (1000, 800), (250, 0), (10000, 5000)];
        for (distance, depth) in cases {
            for bearing in [45u16, 135, 225, 315] {
                let point = project(distance, bearing, depth, 0).unwrap();
                assert_eq!(
                    point.x.abs(),
                    point.y.abs(),
                    "asymmetric projection for distance {} depth {} bearing {}",
                    distance,
                    depth,
                    bearing
                );
            }
        }
    }

    #[test]
    fn test_projection_is_idempotent() {
        let first = project(812, 207, -44, 12).unwrap();
        let second = project(812, 207, -44, 12).unwrap();
        assert_eq!(first, second);
    }
}
