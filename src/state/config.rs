//! Construction-time configuration of the seek bar

use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::constants::{colors, dimensions, range};
use crate::error::{Result, SeekBarError};
use crate::geometry::Padding;

/// Style and initial state of a [`RangeSeekBar`](crate::RangeSeekBar).
///
/// Missing fields fall back to their defaults when deserialized, so a
/// config file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeekBarConfig {
    /// Full-span track color
    pub track_color: Color32,

    /// Selected range color
    pub range_color: Color32,

    /// Inner knob cap color
    pub knob_color: Color32,

    /// Outer knob circle color
    pub knob_tint: Color32,

    /// Initial lower bound in percent
    pub min_percentage: i32,

    /// Initial upper bound in percent
    pub max_percentage: i32,

    pub left_knob_enabled: bool,
    pub right_knob_enabled: bool,

    /// Outer knob radius in pixels
    pub knob_radius: f32,

    /// Thickness of the track and range bars
    pub track_thickness: f32,

    pub padding: Padding,
}

impl Default for SeekBarConfig {
    fn default() -> Self {
        Self {
            track_color: colors::TRACK,
            range_color: colors::RANGE,
            knob_color: colors::KNOB,
            knob_tint: colors::KNOB_TINT,
            min_percentage: range::DEFAULT_MIN_PERCENT,
            max_percentage: range::DEFAULT_MAX_PERCENT,
            left_knob_enabled: true,
            right_knob_enabled: true,
            knob_radius: dimensions::DEFAULT_KNOB_RADIUS,
            track_thickness: dimensions::DEFAULT_TRACK_THICKNESS,
            padding: Padding::default(),
        }
    }
}

impl SeekBarConfig {
    /// Create a new SeekBarConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial range
    pub fn range(mut self, min: i32, max: i32) -> Self {
        self.min_percentage = min;
        self.max_percentage = max;
        self
    }

    pub fn colors(mut self, track: Color32, range: Color32, knob: Color32, knob_tint: Color32) -> Self {
        self.track_color = track;
        self.range_color = range;
        self.knob_color = knob;
        self.knob_tint = knob_tint;
        self
    }

    pub fn knobs_enabled(mut self, left: bool, right: bool) -> Self {
        self.left_knob_enabled = left;
        self.right_knob_enabled = right;
        self
    }

    pub fn knob_radius(mut self, radius: f32) -> Self {
        self.knob_radius = radius;
        self
    }

    pub fn track_thickness(mut self, thickness: f32) -> Self {
        self.track_thickness = thickness;
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Reject a range whose maximum is below its minimum
    pub fn validate(&self) -> Result<()> {
        check_range(self.min_percentage, self.max_percentage)
    }

    /// Load and validate a configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        log::debug!("Loaded seek bar config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::debug!("Saved seek bar config to {}", path.as_ref().display());
        Ok(())
    }
}

/// Shared validation for construction and range assignment.
pub(crate) fn check_range(min: i32, max: i32) -> Result<()> {
    if max < min {
        return Err(SeekBarError::InvalidRange { min, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SeekBarConfig::default();
        assert_eq!(config.min_percentage, 0);
        assert_eq!(config.max_percentage, 100);
        assert!(config.left_knob_enabled);
        assert!(config.right_knob_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let config = SeekBarConfig::new().range(60, 40);
        assert!(matches!(
            config.validate(),
            Err(SeekBarError::InvalidRange { min: 60, max: 40 })
        ));
        assert!(SeekBarConfig::new().range(50, 50).validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seek.json");

        let config = SeekBarConfig::new()
            .range(25, 75)
            .knobs_enabled(true, false)
            .colors(Color32::RED, Color32::GREEN, Color32::WHITE, Color32::BLACK)
            .padding(Padding::same(4.0));
        config.save(&path).unwrap();

        let loaded = SeekBarConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{ "min_percentage": 10, "right_knob_enabled": false }"#).unwrap();

        let loaded = SeekBarConfig::load(&path).unwrap();
        assert_eq!(loaded.min_percentage, 10);
        assert_eq!(loaded.max_percentage, 100);
        assert!(!loaded.right_knob_enabled);
        assert_eq!(loaded.knob_radius, dimensions::DEFAULT_KNOB_RADIUS);
    }

    #[test]
    fn test_load_rejects_invalid_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{ "min_percentage": 80, "max_percentage": 20 }"#).unwrap();

        assert!(matches!(
            SeekBarConfig::load(&path),
            Err(SeekBarError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SeekBarConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(SeekBarError::FileIo(_))));
    }
}
