//! Map document model and JSON round-trip
//!
//! A saved map is a settings block plus a flat list of raw observation
//! records. Only the raw parameters are persisted, never projected
//! coordinates; the projection is recomputed against whatever reference
//! depth the settings carry.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::core::{MapError, MapResult};
use crate::model::LocationMap;
use crate::scene::color::CategoryStyle;

/// Flat persisted form of a single location.
///
/// Optional descriptive fields round-trip their true absence; display
/// defaults are applied when reading a live `Location`, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub distance: u32,
    pub bearing: u16,
    pub depth: i32,
    #[serde(default)]
    pub done: bool,
    /// Absent in files written before the beacon flag existed
    #[serde(default)]
    pub beacon: bool,
}

/// Settings block of a saved map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSettings {
    pub reference_depth: i32,
}

/// On-disk document shape: settings plus the location list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDocument {
    pub settings: MapSettings,
    pub locations: Vec<LocationRecord>,
}

/// Errors loading or saving a map document
#[derive(Debug)]
pub enum StorageError {
    Io { message: String },
    Serialization { message: String },
    Map(MapError),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io { message } => write!(f, "Map file I/O error: {}", message),
            StorageError::Serialization { message } => {
                write!(f, "Map file serialization error: {}", message)
            }
            StorageError::Map(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<MapError> for StorageError {
    fn from(error: MapError) -> Self {
        StorageError::Map(error)
    }
}

/// Build a live map from a document.
///
/// Each record's explicit category is validated against the injected table
/// before construction; this boundary, not the location model, owns category
/// validation. Position errors propagate from the projector.
pub fn build_map(
    document: &MapDocument,
    categories: &HashMap<String, CategoryStyle>,
) -> MapResult<LocationMap> {
    let mut map = LocationMap::new(document.settings.reference_depth);
    for record in &document.locations {
        if let Some(category) = record.category.as_deref() {
            if !categories.contains_key(category) {
                return Err(MapError::UnknownCategory {
                    category: category.to_string(),
                });
            }
        }
        let id = map.add(record.distance, record.bearing, record.depth)?;
        let location = map.get_mut(id).ok_or(MapError::NotFound { id })?;
        if let Some(name) = record.name.as_deref() {
            location.set_name(name);
        }
        if let Some(category) = record.category.as_deref() {
            location.set_category(category);
        }
        if let Some(description) = record.description.as_deref() {
            location.set_description(description);
        }
        location.done = record.done;
        location.beacon = record.beacon;
    }
    info!("built map with {} locations", map.len());
    Ok(map)
}

/// Flatten a live map back into its document form
pub fn to_document(map: &LocationMap) -> MapDocument {
    MapDocument {
        settings: MapSettings {
            reference_depth: map.reference_depth(),
        },
        locations: map
            .locations()
            .map(|location| LocationRecord {
                name: location.raw_name().map(str::to_string),
                description: location.description().map(str::to_string),
                category: location.raw_category().map(str::to_string),
                distance: location.distance(),
                bearing: location.bearing(),
                depth: location.depth(),
                done: location.done,
                beacon: location.beacon,
            })
            .collect(),
    }
}

/// Load a map document from a JSON file
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<MapDocument, StorageError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        error!("map file read failed ({}): {}", path.display(), e);
        StorageError::Io { message: e.to_string() }
    })?;
    let document: MapDocument = serde_json::from_str(&contents).map_err(|e| {
        error!("map file parse failed ({}): {}", path.display(), e);
        StorageError::Serialization { message: e.to_string() }
    })?;
    info!("loaded {} location records from {}", document.locations.len(), path.display());
    Ok(document)
}

/// Save a map document as pretty-printed JSON
pub fn save_document<P: AsRef<Path>>(path: P, document: &MapDocument) -> Result<(), StorageError> {
    let path = path.as_ref();
    let contents = serde_json::to_string_pretty(document)
        .map_err(|e| StorageError::Serialization { message: e.to_string() })?;
    fs::write(path, contents).map_err(|e| {
        error!("map file write failed ({}): {}", path.display(), e);
        StorageError::Io { message: e.to_string() }
    })?;
    info!("saved {} location records to {}", document.locations.len(), path.display());
    Ok(())
}
