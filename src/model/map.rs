//! Ordered collection of locations sharing one reference depth

use std::fmt;

use log::debug;

use crate::core::{Extents, LocationId, MapError, MapResult};
use crate::geometry::projection;

use super::Location;

/// Owns an ordered set of locations and computes their aggregate extents.
///
/// Members are kept in insertion order for deterministic iteration. Every
/// member carries the map's reference depth; `add` enforces this and it can
/// only change for all members at once.
///
/// Extents are a derived view, recomputed on every call. A host embedding
/// this map from multiple threads must wrap any mutate-then-read sequence in
/// a single mutual-exclusion boundary of its own.
#[derive(Debug, Clone, Default)]
pub struct LocationMap {
    reference_depth: i32,
    next_id: u64,
    locations: Vec<(LocationId, Location)>,
}

impl LocationMap {
    pub fn new(reference_depth: i32) -> Self {
        debug!("location map created with reference depth {}", reference_depth);
        Self {
            reference_depth,
            next_id: 0,
            locations: Vec::new(),
        }
    }

    pub fn reference_depth(&self) -> i32 {
        self.reference_depth
    }

    /// Construct a location with the map's reference depth and append it.
    ///
    /// Propagates the projector's validation errors. Returns the new
    /// member's id; reach it through `get`/`get_mut` for follow-up edits.
    pub fn add(&mut self, distance: u32, bearing: u16, depth: i32) -> MapResult<LocationId> {
        let location = Location::new(distance, bearing, depth, self.reference_depth)?;
        let id = LocationId(self.next_id);
        self.next_id += 1;
        debug!("added location {}: {}", id, location);
        self.locations.push((id, location));
        Ok(id)
    }

    /// Remove and return a member. Fails with `NotFound` for an id that is
    /// not (or no longer) in the map; a stale id is a caller logic error
    /// worth surfacing, never silently ignored.
    pub fn delete(&mut self, id: LocationId) -> MapResult<Location> {
        match self.locations.iter().position(|(member_id, _)| *member_id == id) {
            Some(index) => {
                let (_, location) = self.locations.remove(index);
                debug!("deleted location {}: {} ({} members left)", id, location, self.locations.len());
                Ok(location)
            }
            None => Err(MapError::NotFound { id }),
        }
    }

    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations
            .iter()
            .find(|(member_id, _)| *member_id == id)
            .map(|(_, location)| location)
    }

    pub fn get_mut(&mut self, id: LocationId) -> Option<&mut Location> {
        self.locations
            .iter_mut()
            .find(|(member_id, _)| *member_id == id)
            .map(|(_, location)| location)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Members with their ids, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations.iter().map(|(id, location)| (*id, location))
    }

    /// Members in insertion order
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter().map(|(_, location)| location)
    }

    /// Minimum and maximum of x, y and depth over the current members.
    ///
    /// A full scan on every call; nothing is maintained incrementally, so the
    /// result is consistent at the instant of the call. An empty map reports
    /// `Extents::ZERO`.
    pub fn extents(&self) -> Extents {
        let mut members = self.locations();
        let first = match members.next() {
            Some(location) => location,
            None => return Extents::ZERO,
        };
        let point = first.position();
        let mut extents = Extents {
            min_x: point.x,
            max_x: point.x,
            min_y: point.y,
            max_y: point.y,
            min_depth: first.depth(),
            max_depth: first.depth(),
        };
        for location in members {
            let point = location.position();
            extents.min_x = extents.min_x.min(point.x);
            extents.max_x = extents.max_x.max(point.x);
            extents.min_y = extents.min_y.min(point.y);
            extents.max_y = extents.max_y.max(point.y);
            extents.min_depth = extents.min_depth.min(location.depth());
            extents.max_depth = extents.max_depth.max(location.depth());
        }
        extents
    }

    /// Move the shared reference point to a new depth.
    ///
    /// Every member is checked against the new depth before anything is
    /// committed; on failure the map and all members keep their previous
    /// reference depth.
    pub fn set_reference_depth(&mut self, reference_depth: i32) -> MapResult<()> {
        for (_, location) in &self.locations {
            projection::surface_distance(location.distance(), location.depth(), reference_depth)?;
        }
        self.reference_depth = reference_depth;
        for (_, location) in &mut self.locations {
            location.set_reference_depth(reference_depth);
        }
        debug!("reference depth changed to {}", reference_depth);
        Ok(())
    }
}

impl fmt::Display for LocationMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationMap ({} locations, extents {:?})", self.len(), self.extents())
    }
}
