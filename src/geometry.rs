//! Track geometry and pixel/percentage mapping
//!
//! Everything here is pure: a layout is recomputed from scratch whenever the
//! widget is measured or a knob moves, never patched in place.

use std::cmp::Ordering;

use egui::{Pos2, Rect, Vec2, pos2, vec2};
use serde::{Deserialize, Serialize};

use crate::constants::dimensions::KNOB_CAP_RATIO;
use crate::constants::range::{MAX_PERCENT, MIN_PERCENT};

/// Space reserved around the widget content
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Padding {
    pub fn same(value: f32) -> Self {
        Self {
            left: value,
            right: value,
            top: value,
            bottom: value,
        }
    }
}

/// Horizontal span of the track in local pixel coordinates.
///
/// The span is inset by the knob radius so both knob circles stay inside
/// the widget bounds at 0% and 100%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub start: f32,
    pub end: f32,
}

impl Track {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Track for a widget of `width` pixels.
    pub fn for_width(width: f32, padding: &Padding, knob_radius: f32) -> Self {
        Self {
            start: padding.left + knob_radius,
            end: width - padding.right - knob_radius,
        }
    }

    /// A track without positive length cannot map percentages.
    ///
    /// NaN bounds also count as degenerate.
    pub fn is_degenerate(&self) -> bool {
        self.end.partial_cmp(&self.start) != Some(Ordering::Greater)
    }

    /// Pixel position of a percentage: `x = m * p + start`.
    ///
    /// A degenerate track pins every percentage to `start`.
    pub fn percent_to_x(&self, percent: i32) -> f32 {
        if self.is_degenerate() {
            return self.start;
        }
        let slope = (self.end - self.start) / MAX_PERCENT as f32;
        slope * percent as f32 + self.start
    }

    /// Percentage of a pixel position, rounded half up.
    ///
    /// The result is not clamped: callers only feed positions already
    /// inside the track. A degenerate track maps everything to 0.
    pub fn x_to_percent(&self, x: f32) -> i32 {
        if self.is_degenerate() {
            return MIN_PERCENT;
        }
        let slope = MAX_PERCENT as f32 / (self.end - self.start);
        (slope * (x - self.start) + 0.5).floor() as i32
    }
}

/// One knob: an outer circle with a smaller cap drawn on top
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobGeometry {
    pub center: Pos2,
    pub radius: f32,
    pub cap_radius: f32,
}

impl KnobGeometry {
    pub fn new(x: f32, center_y: f32, radius: f32) -> Self {
        Self {
            center: pos2(x, center_y),
            radius,
            cap_radius: radius * KNOB_CAP_RATIO,
        }
    }

    pub fn x(&self) -> f32 {
        self.center.x
    }

    /// Horizontal hit test; pointer events only carry an x coordinate.
    pub fn hit(&self, x: f32) -> bool {
        (x - self.center.x).abs() <= self.radius
    }
}

/// Immutable geometry of one layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekBarLayout {
    /// Measured size of the widget including padding
    pub size: Vec2,
    pub track: Track,
    pub center_y: f32,
    pub thickness: f32,
    pub track_rect: Rect,
    pub range_rect: Rect,
    pub left: KnobGeometry,
    pub right: KnobGeometry,
}

impl SeekBarLayout {
    /// Lay out a widget `width` pixels wide with knobs at the given positions.
    pub fn compute(
        width: f32,
        padding: &Padding,
        knob_radius: f32,
        thickness: f32,
        left_x: f32,
        right_x: f32,
    ) -> Self {
        let track = Track::for_width(width, padding, knob_radius);
        let center_y = padding.top + knob_radius;
        let height = knob_radius * 2.0 + padding.top + padding.bottom;
        let half = thickness / 2.0;
        // A degenerate track still yields a valid (empty) rectangle.
        let track_rect = Rect::from_min_max(
            pos2(track.start, center_y - half),
            pos2(track.end.max(track.start), center_y + half),
        );

        let mut layout = Self {
            size: vec2(width, height),
            track,
            center_y,
            thickness,
            track_rect,
            range_rect: Rect::NOTHING,
            left: KnobGeometry::new(left_x, center_y, knob_radius),
            right: KnobGeometry::new(right_x, center_y, knob_radius),
        };
        layout.range_rect = layout.selected_range();
        layout
    }

    /// Copy of this layout with the left knob at `x`.
    pub fn with_left_x(&self, x: f32) -> Self {
        let mut next = *self;
        next.left = KnobGeometry::new(x, self.center_y, self.left.radius);
        next.range_rect = next.selected_range();
        next
    }

    /// Copy of this layout with the right knob at `x`.
    pub fn with_right_x(&self, x: f32) -> Self {
        let mut next = *self;
        next.right = KnobGeometry::new(x, self.center_y, self.right.radius);
        next.range_rect = next.selected_range();
        next
    }

    fn selected_range(&self) -> Rect {
        let half = self.thickness / 2.0;
        Rect::from_min_max(
            pos2(self.left.x(), self.center_y - half),
            pos2(self.right.x(), self.center_y + half),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn layout(width: f32) -> SeekBarLayout {
        SeekBarLayout::compute(width, &Padding::default(), 10.0, 4.0, 10.0, width - 10.0)
    }

    #[test]
    fn test_track_is_inset_by_knob_radius() {
        let padding = Padding {
            left: 5.0,
            right: 7.0,
            ..Padding::default()
        };
        let track = Track::for_width(220.0, &padding, 10.0);
        assert_eq!(track.start, 15.0);
        assert_eq!(track.end, 203.0);
    }

    #[test]
    fn test_mapping_endpoints() {
        let track = Track::new(10.0, 210.0);
        assert_eq!(track.percent_to_x(0), 10.0);
        assert_eq!(track.percent_to_x(100), 210.0);
        assert_eq!(track.percent_to_x(50), 110.0);
        assert_eq!(track.x_to_percent(10.0), 0);
        assert_eq!(track.x_to_percent(210.0), 100);
    }

    #[test]
    fn test_rounding_is_half_up() {
        let track = Track::new(0.0, 100.0);
        assert_eq!(track.x_to_percent(41.5), 42);
        assert_eq!(track.x_to_percent(41.49), 41);
    }

    #[test]
    fn test_degenerate_track_falls_back_to_start() {
        let track = Track::new(30.0, 20.0);
        assert!(track.is_degenerate());
        assert_eq!(track.percent_to_x(75), 30.0);
        assert_eq!(track.x_to_percent(25.0), 0);

        let zero = Track::new(12.0, 12.0);
        assert!(zero.is_degenerate());
        assert_eq!(zero.x_to_percent(12.0), 0);

        let nan = Track::new(12.0, f32::NAN);
        assert!(nan.is_degenerate());
        assert_eq!(nan.percent_to_x(50), 12.0);
        assert!(!Track::new(12.0, 13.0).is_degenerate());
    }

    #[test]
    fn test_layout_rectangles() {
        let l = layout(120.0);
        assert_eq!(l.size, vec2(120.0, 20.0));
        assert_eq!(l.center_y, 10.0);
        assert_eq!(l.track_rect.min, pos2(10.0, 8.0));
        assert_eq!(l.track_rect.max, pos2(110.0, 12.0));
        assert_eq!(l.range_rect, l.track_rect);
        assert_eq!(l.left.cap_radius, 5.0);
        assert_eq!(l.left.radius, 10.0);
    }

    #[test]
    fn test_moving_knob_recomputes_range() {
        let l = layout(120.0).with_left_x(40.0).with_right_x(80.0);
        assert_eq!(l.range_rect.min.x, 40.0);
        assert_eq!(l.range_rect.max.x, 80.0);
        assert_eq!(l.track_rect.min.x, 10.0);
    }

    #[test]
    fn test_knob_hit_box() {
        let knob = KnobGeometry::new(50.0, 10.0, 10.0);
        assert!(knob.hit(40.0));
        assert!(knob.hit(60.0));
        assert!(!knob.hit(60.5));
    }

    proptest! {
        #[test]
        fn prop_percent_round_trips(start in 0.0f32..500.0, len in 1.0f32..4000.0, p in 0i32..=100) {
            let track = Track::new(start, start + len);
            prop_assert_eq!(track.x_to_percent(track.percent_to_x(p)), p);
        }

        #[test]
        fn prop_pixel_round_trips_within_a_pixel(len in 1.0f32..200.0, t in 0.0f32..=1.0) {
            let track = Track::new(12.0, 12.0 + len);
            let x = track.start + t * len;
            let back = track.percent_to_x(track.x_to_percent(x));
            prop_assert!((back - x).abs() <= 1.0);
        }
    }
}
