//! Display color derivation
//!
//! Two mutually exclusive schemes, selected by the host UI: a category table
//! lookup, or a linear rescale of depth into hue and lightness so that
//! shallower and deeper locations pull toward opposite ends of both ranges.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::{Extents, MapError, MapResult};
use crate::model::Location;

/// HSL display color, in the consuming renderer's component ranges
/// (hue 0..=360, saturation and lightness 0..=255)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

/// Display style configured for one category: marker color and icon glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStyle {
    pub color: Color,
    pub icon: char,
}

/// Target ranges for the depth color scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthScale {
    pub hue_min: f64,
    pub hue_max: f64,
    pub lightness_min: f64,
    pub lightness_max: f64,
    pub saturation: u8,
}

impl Default for DepthScale {
    fn default() -> Self {
        Self {
            hue_min: 0.0,
            hue_max: 60.0,
            lightness_min: 60.0,
            lightness_max: 200.0,
            saturation: 255,
        }
    }
}

/// Color scheme selected by the host UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    Category,
    Depth,
}

/// Derives a display color per location.
///
/// The category table, done color and depth scale are injected at
/// construction; the mapper never reaches into ambient configuration.
#[derive(Debug, Clone)]
pub struct ColorMapper {
    scheme: ColorScheme,
    categories: HashMap<String, CategoryStyle>,
    done_color: Color,
    depth_scale: DepthScale,
}

impl ColorMapper {
    pub fn new(
        categories: HashMap<String, CategoryStyle>,
        done_color: Color,
        depth_scale: DepthScale,
    ) -> Self {
        Self {
            scheme: ColorScheme::Category,
            categories,
            done_color,
            depth_scale,
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn set_scheme(&mut self, scheme: ColorScheme) {
        self.scheme = scheme;
    }

    /// Color under the currently selected scheme. `extents` supplies the
    /// depth limits for the depth scheme and is read fresh on every call.
    pub fn color(&self, location: &Location, extents: &Extents) -> MapResult<Color> {
        match self.scheme {
            ColorScheme::Category => self.category_color(location),
            ColorScheme::Depth => Ok(self.depth_color(location, extents)),
        }
    }

    /// Category scheme: the fixed done color for completed locations,
    /// otherwise the table entry for the location's category.
    ///
    /// A category missing from the table is surfaced as `UnknownCategory`
    /// rather than defaulted; a silent fallback would misrepresent the
    /// location.
    pub fn category_color(&self, location: &Location) -> MapResult<Color> {
        if location.done {
            return Ok(self.done_color);
        }
        match self.categories.get(location.category()) {
            Some(style) => Ok(style.color),
            None => Err(MapError::UnknownCategory {
                category: location.category().to_string(),
            }),
        }
    }

    /// Depth scheme: rescale depth from the map's current depth limits into
    /// the hue and lightness target ranges, inverted so the shallowest
    /// location takes the top of each range.
    ///
    /// Components are rounded and clamped to their legal ranges. Degenerate
    /// limits (`min == max`) yield the bottom of each range.
    pub fn depth_color(&self, location: &Location, extents: &Extents) -> Color {
        let depth = f64::from(location.depth());
        let min = f64::from(extents.min_depth);
        let max = f64::from(extents.max_depth);
        let hue = scale_value(depth, min, max, self.depth_scale.hue_min, self.depth_scale.hue_max, true);
        let lightness = scale_value(
            depth,
            min,
            max,
            self.depth_scale.lightness_min,
            self.depth_scale.lightness_max,
            true,
        );
        Color {
            hue: hue.round().clamp(0.0, 360.0) as u16,
            saturation: self.depth_scale.saturation,
            lightness: lightness.round().clamp(0.0, 255.0) as u8,
        }
    }

    /// Icon glyph for the location's category, same lookup policy as
    /// `category_color`
    pub fn icon(&self, location: &Location) -> MapResult<char> {
        match self.categories.get(location.category()) {
            Some(style) => Ok(style.icon),
            None => Err(MapError::UnknownCategory {
                category: location.category().to_string(),
            }),
        }
    }
}

/// Linearly rescale `value` from the source range to the destination range.
///
/// With `inverted`, the source minimum maps to `dest_max` instead of
/// `dest_min`. A degenerate source range (`value_min == value_max`) yields
/// `dest_min` instead of dividing by zero.
pub fn scale_value(
    value: f64,
    value_min: f64,
    value_max: f64,
    dest_min: f64,
    dest_max: f64,
    inverted: bool,
) -> f64 {
    let span = value_max - value_min;
    if span == 0.0 {
        return dest_min;
    }
    let mut normalized = (value - value_min) / span;
    if inverted {
        normalized = 1.0 - normalized;
    }
    normalized * (dest_max - dest_min) + dest_min
}
