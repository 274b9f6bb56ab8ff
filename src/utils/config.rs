//! Map viewer configuration
//!
//! The host application supplies the values this core consumes but does not
//! define: grid steps, the category style table, the done color and the
//! depth color scale. Loaded from JSON and validated before use.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::scene::color::{CategoryStyle, Color, DepthScale};

/// External configuration consumed by the scene layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Depth of the shared reference point
    pub reference_depth: i32,
    /// Major grid step (map units)
    pub major_grid: i64,
    /// Minor grid step (map units)
    pub minor_grid: i64,
    /// Fixed marker color for completed locations
    pub marker_done_color: Color,
    /// Target ranges for the depth color scheme
    pub depth_scale: DepthScale,
    /// Style per known category name
    pub categories: HashMap<String, CategoryStyle>,
}

impl Default for MapConfig {
    fn default() -> Self {
        let mut categories = HashMap::new();
        categories.insert(
            "default".to_string(),
            CategoryStyle {
                color: Color { hue: 0, saturation: 0, lightness: 255 },
                icon: '\u{25cf}',
            },
        );
        Self {
            reference_depth: 0,
            major_grid: 100,
            minor_grid: 20,
            marker_done_color: Color { hue: 120, saturation: 128, lightness: 96 },
            depth_scale: DepthScale::default(),
            categories,
        }
    }
}

/// Configuration validation and I/O errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Parameter value outside its legal range
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
    /// Configuration file I/O error
    IoError { message: String },
    /// JSON serialization/deserialization error
    SerializationError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidParameter { parameter, value, reason } => {
                write!(f, "Invalid configuration parameter {} = {}: {}", parameter, value, reason)
            }
            ConfigError::IoError { message } => write!(f, "Configuration I/O error: {}", message),
            ConfigError::SerializationError { message } => {
                write!(f, "Configuration serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl MapConfig {
    /// Load and validate a configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError { message: e.to_string() })?;
        let config: MapConfig = serde_json::from_str(&contents)
            .map_err(|e| ConfigError::SerializationError { message: e.to_string() })?;
        config.validate()?;
        info!("configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializationError { message: e.to_string() })?;
        fs::write(path.as_ref(), contents)
            .map_err(|e| ConfigError::IoError { message: e.to_string() })
    }

    /// Check every parameter against its legal range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.major_grid < 1 {
            return Err(ConfigError::InvalidParameter {
                parameter: "major_grid".to_string(),
                value: self.major_grid.to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if self.minor_grid < 1 {
            return Err(ConfigError::InvalidParameter {
                parameter: "minor_grid".to_string(),
                value: self.minor_grid.to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if self.minor_grid > self.major_grid {
            return Err(ConfigError::InvalidParameter {
                parameter: "minor_grid".to_string(),
                value: self.minor_grid.to_string(),
                reason: format!("must not exceed major_grid ({})", self.major_grid),
            });
        }
        for (parameter, value) in [
            ("depth_scale.hue_min", self.depth_scale.hue_min),
            ("depth_scale.hue_max", self.depth_scale.hue_max),
        ] {
            if !(0.0..=360.0).contains(&value) {
                return Err(ConfigError::InvalidParameter {
                    parameter: parameter.to_string(),
                    value: value.to_string(),
                    reason: "hue must be within 0..=360".to_string(),
                });
            }
        }
        for (parameter, value) in [
            ("depth_scale.lightness_min", self.depth_scale.lightness_min),
            ("depth_scale.lightness_max", self.depth_scale.lightness_max),
        ] {
            if !(0.0..=255.0).contains(&value) {
                return Err(ConfigError::InvalidParameter {
                    parameter: parameter.to_string(),
                    value: value.to_string(),
                    reason: "lightness must be within 0..=255".to_string(),
                });
            }
        }
        if self.categories.is_empty() {
            return Err(ConfigError::InvalidParameter {
                parameter: "categories".to_string(),
                value: "{}".to_string(),
                reason: "at least one category style is required".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = MapConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.major_grid, 100);
        assert_eq!(config.minor_grid, 20);
        assert!(config.categories.contains_key("default"));
    }

    #[test]
    fn test_validate_rejects_bad_grid_steps() {
        let mut config = MapConfig::default();
        config.major_grid = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidParameter { ref parameter, .. }) if parameter == "major_grid"
        ));

        let mut config = MapConfig::default();
        config.minor_grid = 500;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidParameter { ref parameter, .. }) if parameter == "minor_grid"
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range_scale() {
        let mut config = MapConfig::default();
        config.depth_scale.hue_max = 400.0;
        assert!(config.validate().is_err());

        let mut config = MapConfig::default();
        config.depth_scale.lightness_max = 300.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_requires_categories() {
        let mut config = MapConfig::default();
        config.categories.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = MapConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: MapConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
