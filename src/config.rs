//! Serializable identicon configuration.
//!
//! An [`IdenticonConfig`] controls the saturation of the colored entries of
//! the theme and how lightness parameters map to actual lightness values.
//! It serializes to JSON so it can be stored next to an application or passed
//! between processes.
//!
//! # Example
//!
//! ```
//! use identicon_renderer::{IdenticonConfig, LightnessRange};
//!
//! let config = IdenticonConfig::new()
//!     .with_saturation(0.7)
//!     .with_color_lightness(LightnessRange::new(0.35, 0.75));
//!
//! let json = config.to_json().unwrap();
//! let restored = IdenticonConfig::from_json(&json).unwrap();
//! assert_eq!(restored, config);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// LightnessRange
// ============================================================================

/// Maps a lightness parameter in `[0, 1]` onto `[min, max]`.
///
/// The result is clamped to `[0, 1]`, so ranges reaching outside the valid
/// lightness interval are allowed.
///
/// ```json
/// { "min": 0.4, "max": 0.8 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct LightnessRange {
    /// Lightness produced for parameter 0.
    pub min: f32,
    /// Lightness produced for parameter 1.
    pub max: f32,
}

impl LightnessRange {
    /// Creates a new range.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Maps `value` into the range, clamped to `[0, 1]`.
    pub fn lightness(&self, value: f32) -> f32 {
        let value = self.min + value * (self.max - self.min);
        if value < 0.0 {
            0.0
        } else if value > 1.0 {
            1.0
        } else {
            value
        }
    }
}

// ============================================================================
// IdenticonConfig
// ============================================================================

/// Color configuration for identicon generation.
///
/// # JSON Format
///
/// ```json
/// {
///   "saturation": 0.5,
///   "colorLightness": { "min": 0.4, "max": 0.8 },
///   "grayscaleLightness": { "min": 0.3, "max": 0.9 }
/// }
/// ```
///
/// Missing fields take their default values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct IdenticonConfig {
    /// Saturation of the colored theme entries (0.0-1.0).
    pub saturation: f32,

    /// Lightness range for the colored theme entries.
    pub color_lightness: LightnessRange,

    /// Lightness range for the grayscale theme entries.
    pub grayscale_lightness: LightnessRange,
}

impl Default for IdenticonConfig {
    fn default() -> Self {
        Self {
            saturation: 0.5,
            color_lightness: LightnessRange::new(0.4, 0.8),
            grayscale_lightness: LightnessRange::new(0.3, 0.9),
        }
    }
}

impl IdenticonConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the saturation, clamped to 0.0-1.0.
    pub fn with_saturation(mut self, saturation: f32) -> Self {
        self.saturation = saturation.clamp(0.0, 1.0);
        self
    }

    /// Sets the lightness range of the colored entries.
    pub fn with_color_lightness(mut self, range: LightnessRange) -> Self {
        self.color_lightness = range;
        self
    }

    /// Sets the lightness range of the grayscale entries.
    pub fn with_grayscale_lightness(mut self, range: LightnessRange) -> Self {
        self.grayscale_lightness = range;
        self
    }

    /// Lightness of a colored entry for a parameter in `[0, 1]`.
    pub fn color_lightness(&self, value: f32) -> f32 {
        self.color_lightness.lightness(value)
    }

    /// Lightness of a grayscale entry for a parameter in `[0, 1]`.
    pub fn grayscale_lightness(&self, value: f32) -> f32 {
        self.grayscale_lightness.lightness(value)
    }

    /// Serializes the config to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the config to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns the JSON schema of the config format.
    #[cfg(feature = "jsonschema")]
    pub fn json_schema() -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&schemars::schema_for!(IdenticonConfig))
    }
}

// ============================================================================
// Tests
// ============================================================================
