//! Widget-wide constants and default values
//!
//! Centralizes the dimensions, colors and limits used by the seek bar so
//! the geometry, rendering and configuration code agree on them.

/// Percentage range limits
pub mod range {
    /// Lowest selectable percentage
    pub const MIN_PERCENT: i32 = 0;

    /// Highest selectable percentage
    pub const MAX_PERCENT: i32 = 100;

    /// Default lower bound of the selected range
    pub const DEFAULT_MIN_PERCENT: i32 = MIN_PERCENT;

    /// Default upper bound of the selected range
    pub const DEFAULT_MAX_PERCENT: i32 = MAX_PERCENT;
}

/// Geometry defaults
pub mod dimensions {
    /// Default outer knob radius
    pub const DEFAULT_KNOB_RADIUS: f32 = 12.0;

    /// Inner cap radius relative to the outer knob radius
    pub const KNOB_CAP_RATIO: f32 = 0.5;

    /// Default thickness of the track bar
    pub const DEFAULT_TRACK_THICKNESS: f32 = 4.0;

    /// Corner radius of the track and selected-range bars
    pub const BAR_CORNER_RADIUS: f32 = 10.0;

    /// Width used when the host offers unbounded space
    pub const FALLBACK_WIDTH: f32 = 200.0;
}

/// Default colors
pub mod colors {
    use egui::Color32;

    /// Full-span track
    pub const TRACK: Color32 = Color32::from_rgb(189, 189, 189);

    /// Selected range segment
    pub const RANGE: Color32 = Color32::from_rgb(33, 150, 243);

    /// Inner knob cap
    pub const KNOB: Color32 = Color32::from_rgb(255, 255, 255);

    /// Outer knob circle
    pub const KNOB_TINT: Color32 = Color32::from_rgb(25, 118, 210);
}

/// Configuration file paths
pub mod config {
    /// Configuration file name
    pub const CONFIG_FILE: &str = "range-seek-bar.json";
}
