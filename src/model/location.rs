//! A single validated field observation

use std::fmt;

use crate::core::{MapError, MapResult, PlanarPoint, DEFAULT_CATEGORY, DEFAULT_NAME};
use crate::geometry::projection;

/// A map location measured in distance, bearing and depth relative to a
/// shared reference point, plus descriptive attributes for display and
/// editing.
///
/// The positional fields are validated on every write: the bearing must lie
/// in `[0, 360]` and the depth offset from the reference can never exceed the
/// straight-line distance. Planar coordinates are derived on demand and never
/// cached, so they always reflect the current measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    distance: u32,
    bearing: u16,
    depth: i32,
    reference_depth: i32,
    name: Option<String>,
    category: Option<String>,
    description: Option<String>,
    /// Completion flag; completed locations are hidden by default
    pub done: bool,
    /// Marks the observation as usable as a secondary reference point
    pub beacon: bool,
}

impl Location {
    /// Construct a validated location.
    ///
    /// Fails with `InvalidAngle` or `InvalidTriangle` exactly as the
    /// projector would; a `Location` that exists is always projectable.
    pub fn new(distance: u32, bearing: u16, depth: i32, reference_depth: i32) -> MapResult<Self> {
        projection::project(distance, bearing, depth, reference_depth)?;
        Ok(Self {
            distance,
            bearing,
            depth,
            reference_depth,
            name: None,
            category: None,
            description: None,
            done: false,
            beacon: false,
        })
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }

    pub fn bearing(&self) -> u16 {
        self.bearing
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn reference_depth(&self) -> i32 {
        self.reference_depth
    }

    /// Change distance and depth together.
    ///
    /// The two fields form one measurement and can only be validated as a
    /// pair; the update is all-or-nothing and leaves the location untouched
    /// on failure.
    pub fn set_distance_and_depth(&mut self, distance: u32, depth: i32) -> MapResult<()> {
        projection::surface_distance(distance, depth, self.reference_depth)?;
        self.distance = distance;
        self.depth = depth;
        Ok(())
    }

    /// Change the bearing. Cannot violate the triangle invariant on its own,
    /// so it is settable independently.
    pub fn set_bearing(&mut self, bearing: u16) -> MapResult<()> {
        if bearing > 360 {
            return Err(MapError::InvalidAngle { bearing });
        }
        self.bearing = bearing;
        Ok(())
    }

    /// Owning-map hook for reference depth changes. The map re-validates the
    /// triangle invariant for every member before calling this.
    pub(crate) fn set_reference_depth(&mut self, reference_depth: i32) {
        self.reference_depth = reference_depth;
    }

    /// Angle from the reference point to this location, in `[0, 360)`
    pub fn heading(&self) -> u16 {
        projection::heading(self.bearing)
    }

    /// Horizontal distance from the reference point
    pub fn surface_distance(&self) -> u32 {
        let vertical = i64::from(self.depth) - i64::from(self.reference_depth);
        projection::adjacent_side(f64::from(self.distance), vertical as f64).round() as u32
    }

    /// Planar position, recomputed from the current measurements
    pub fn position(&self) -> PlanarPoint {
        projection::planar_offset(self.heading(), self.surface_distance())
    }

    pub fn x(&self) -> i64 {
        self.position().x
    }

    pub fn y(&self) -> i64 {
        self.position().y
    }

    /// Display name, falling back to `DEFAULT_NAME` when unset
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_NAME)
    }

    /// True stored name, absent when never set; serialization uses this so
    /// the fallback never leaks into saved data
    pub fn raw_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the name; an empty string clears it
    pub fn set_name(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.name = if value.is_empty() { None } else { Some(value) };
    }

    /// Display category, falling back to `DEFAULT_CATEGORY` when unset.
    ///
    /// Values are not checked against the configured category table here;
    /// that validation belongs to the loader and the color mapper.
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    /// True stored category, absent when never set
    pub fn raw_category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Set the category; an empty string clears it
    pub fn set_category(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.category = if value.is_empty() { None } else { Some(value) };
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Set the description; an empty string normalizes to absent
    pub fn set_description(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.description = if value.is_empty() { None } else { Some(value) };
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {}m {}\u{b0})",
            self.name(),
            self.distance,
            self.depth,
            self.bearing
        )?;
        if self.description.is_some() {
            write!(f, " [description]")?;
        }
        if self.done {
            write!(f, " done")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MapError;

    #[test]
    fn test_construction_validates_like_projector() {
        let location = Location::new(555, 60, 333, 0).unwrap();
        assert_eq!(location.surface_distance(), 444);
        assert_eq!(location.heading(), 240);
        assert_eq!(location.x(), -385);
        assert_eq!(location.y(), 222);

        assert!(Location::new(100, 361, 0, 0).is_err());
        assert!(Location::new(100, 0, 200, 0).is_err());
    }

    #[test]
    fn test_set_distance_and_depth_is_atomic() {
        let mut location = Location::new(555, 0, 433, 100).unwrap();

        // A rejected update leaves both fields untouched
        let result = location.set_distance_and_depth(10, 500);
        assert_eq!(
            result,
            Err(MapError::InvalidTriangle {
                distance: 10,
                depth: 500,
                reference_depth: 100,
            })
        );
        assert_eq!(location.distance(), 555);
        assert_eq!(location.depth(), 433);

        // A valid update commits both and the position follows
        location.set_distance_and_depth(500, 400).unwrap();
        assert_eq!(location.distance(), 500);
        assert_eq!(location.depth(), 400);
        assert_eq!(location.surface_distance(), 400);
    }

    #[test]
    fn test_set_bearing_validates_range() {
        let mut location = Location::new(100, 0, 50, 0).unwrap();
        assert!(location.set_bearing(360).is_ok());
        assert_eq!(
            location.set_bearing(400),
            Err(MapError::InvalidAngle { bearing: 400 })
        );
        assert_eq!(location.bearing(), 360);
    }

    #[test]
    fn test_position_tracks_mutation() {
        let mut location = Location::new(555, 0, 433, 100).unwrap();
        assert_eq!(location.position(), PlanarPoint { x: 0, y: 444 });

        location.set_bearing(180).unwrap();
        // Reference now due south of the observation: y flips sign
        assert_eq!(location.position(), PlanarPoint { x: 0, y: -444 });
    }

    #[test]
    fn test_descriptive_defaults_at_read_boundary() {
        let mut location = Location::new(100, 0, 50, 0).unwrap();
        assert_eq!(location.name(), "Untitled");
        assert_eq!(location.category(), "default");
        assert_eq!(location.raw_name(), None);
        assert_eq!(location.raw_category(), None);
        assert_eq!(location.description(), None);

        location.set_name("Kelp forest");
        location.set_category("wreck");
        location.set_description("northern edge");
        assert_eq!(location.name(), "Kelp forest");
        assert_eq!(location.raw_name(), Some("Kelp forest"));
        assert_eq!(location.category(), "wreck");
        assert_eq!(location.description(), Some("northern edge"));

        // Empty strings normalize back to absent
        location.set_name("");
        location.set_description("");
        assert_eq!(location.raw_name(), None);
        assert_eq!(location.name(), "Untitled");
        assert_eq!(location.description(), None);
    }

    #[test]
    fn test_display_summary() {
        let mut location = Location::new(555, 60, 333, 0).unwrap();
        location.set_name("Arch");
        location.done = true;
        let summary = format!("{}", location);
        assert!(summary.starts_with("Arch (555 333m 60\u{b0})"));
        assert!(summary.ends_with("done"));
    }
}
