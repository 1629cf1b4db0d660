//! Editor tunables.
//!
//! The board geometry, draw threshold, and curve intensity are fixed
//! constants in [`crate::consts`] because saved documents depend on them.
//! Everything here only affects interaction feel and may be overridden by
//! the host with a JSON object; missing keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{AREA_SAMPLE_SPACING, DRAG_ACTIVATION_DISTANCE_PX, HIT_TOLERANCE, TOKEN_RADIUS};

/// Error returned by [`EditorConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input is not a JSON object of the expected shape.
    #[error("failed to parse editor config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A length that must be positive and finite is not.
    #[error("invalid editor config: {field} must be positive and finite, got {value}")]
    Invalid { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Erase hit slop around strokes, in logical units.
    pub hit_tolerance: f64,
    /// Token hit radius, in logical units.
    pub token_radius: f64,
    /// Drags shorter than this many rendered pixels count as clicks.
    pub drag_activation_px: f64,
    /// Minimum gap between sampled freehand points, in logical units.
    pub area_sample_spacing: f64,
    /// Maximum undo depth. `None` keeps everything.
    pub history_limit: Option<usize>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hit_tolerance: HIT_TOLERANCE,
            token_radius: TOKEN_RADIUS,
            drag_activation_px: DRAG_ACTIVATION_DISTANCE_PX,
            area_sample_spacing: AREA_SAMPLE_SPACING,
            history_limit: None,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON config object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for non-positive or non-finite lengths and a
    /// zero `history_limit`.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every length is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lengths = [
            ("hit_tolerance", self.hit_tolerance),
            ("token_radius", self.token_radius),
            ("drag_activation_px", self.drag_activation_px),
            ("area_sample_spacing", self.area_sample_spacing),
        ];
        for (field, value) in lengths {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid { field, value });
            }
        }
        // A zero limit would keep no undo steps at all.
        if self.history_limit == Some(0) {
            return Err(ConfigError::Invalid { field: "history_limit", value: 0.0 });
        }
        Ok(())
    }
}
