//! The dual-knob range seek bar
//!
//! [`RangeSeekBar`] owns the selected percentage range and the geometry of
//! its last layout pass. Hosts drive it with three calls:
//!
//! - [`measure`](RangeSeekBar::measure) whenever the available width changes
//!   or [`needs_layout`](RangeSeekBar::needs_layout) reports a stale layout
//! - [`render`](RangeSeekBar::render) to get the primitives to draw
//! - [`handle_input`](RangeSeekBar::handle_input) for each pointer event

use crate::constants::dimensions::BAR_CORNER_RADIUS;
use crate::constants::range::{MAX_PERCENT, MIN_PERCENT};
use crate::error::Result;
use crate::events::{InputResponse, PointerEvent, RangeChangeListener, RangeEvent};
use crate::geometry::{SeekBarLayout, Track};
use crate::render::DrawCommand;
use crate::state::{DragState, SeekBarConfig, check_range};

pub struct RangeSeekBar {
    config: SeekBarConfig,

    /// Stored range; knob positions are derived from it on every layout
    min_percent: i32,
    max_percent: i32,

    left_knob_enabled: bool,
    right_knob_enabled: bool,

    /// Width of the last layout pass
    width: Option<f32>,
    layout: Option<SeekBarLayout>,
    needs_layout: bool,

    drag: DragState,
    listener: Option<Box<dyn RangeChangeListener>>,
}

impl Default for RangeSeekBar {
    fn default() -> Self {
        Self::from_valid_config(SeekBarConfig::default())
    }
}

impl std::fmt::Debug for RangeSeekBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeSeekBar")
            .field("min_percent", &self.min_percent)
            .field("max_percent", &self.max_percent)
            .field("left_knob_enabled", &self.left_knob_enabled)
            .field("right_knob_enabled", &self.right_knob_enabled)
            .field("layout", &self.layout)
            .field("drag", &self.drag)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl RangeSeekBar {
    /// Create a seek bar, failing if the configured range is inverted.
    pub fn new(config: SeekBarConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: SeekBarConfig) -> Self {
        Self {
            min_percent: clamp_percent(config.min_percentage),
            max_percent: clamp_percent(config.max_percentage),
            left_knob_enabled: config.left_knob_enabled,
            right_knob_enabled: config.right_knob_enabled,
            config,
            width: None,
            layout: None,
            needs_layout: true,
            drag: DragState::Idle,
            listener: None,
        }
    }

    pub fn config(&self) -> &SeekBarConfig {
        &self.config
    }

    /// Geometry of the last layout pass, if any
    pub fn layout(&self) -> Option<&SeekBarLayout> {
        self.layout.as_ref()
    }

    /// True until the stored range has been laid out
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Lay the widget out for `width` pixels, placing both knobs from the
    /// stored percentage range.
    pub fn measure(&mut self, width: f32) -> SeekBarLayout {
        let config = &self.config;
        let track = Track::for_width(width, &config.padding, config.knob_radius);
        let layout = SeekBarLayout::compute(
            width,
            &config.padding,
            config.knob_radius,
            config.track_thickness,
            track.percent_to_x(self.min_percent),
            track.percent_to_x(self.max_percent),
        );
        self.width = Some(width);
        self.layout = Some(layout);
        self.needs_layout = false;
        layout
    }

    /// Primitives for the current layout, bottom to top.
    ///
    /// Empty until the first [`measure`](Self::measure).
    pub fn render(&self) -> Vec<DrawCommand> {
        let Some(layout) = &self.layout else {
            return Vec::new();
        };
        log::trace!("render {:?}", self.range_value());

        let config = &self.config;
        let mut commands = vec![
            DrawCommand::RoundedRect {
                rect: layout.track_rect,
                corner_radius: BAR_CORNER_RADIUS,
                color: config.track_color,
            },
            DrawCommand::RoundedRect {
                rect: layout.range_rect,
                corner_radius: BAR_CORNER_RADIUS,
                color: config.range_color,
            },
        ];
        for knob in [layout.left, layout.right] {
            commands.push(DrawCommand::Circle {
                center: knob.center,
                radius: knob.radius,
                color: config.knob_tint,
            });
            commands.push(DrawCommand::Circle {
                center: knob.center,
                radius: knob.cap_radius,
                color: config.knob_color,
            });
        }
        commands
    }

    /// Feed one pointer event through the drag state machine.
    ///
    /// Returned events are also delivered to the registered listener.
    pub fn handle_input(&mut self, event: PointerEvent) -> InputResponse {
        if self.needs_layout {
            if let Some(width) = self.width {
                self.measure(width);
            }
        }

        let mut events = Vec::new();
        match event {
            PointerEvent::Press(x) => {
                self.drag = match &self.layout {
                    Some(layout) => DragState::for_press(
                        layout,
                        x,
                        self.left_knob_enabled,
                        self.right_knob_enabled,
                    ),
                    None => DragState::Idle,
                };
            }
            PointerEvent::Move(x) => {
                if let Some(event) = self.move_knob(x) {
                    events.push(event);
                }
            }
            PointerEvent::Release => {
                self.drag = DragState::Idle;
                events.push(RangeEvent::DragCompleted);
            }
            PointerEvent::Cancel => {
                self.drag = DragState::Idle;
            }
        }

        if let Some(listener) = self.listener.as_mut() {
            for event in &events {
                listener.notify(event);
            }
        }

        InputResponse {
            events,
            capture: self.drag.is_dragging(),
        }
    }

    /// Move the dragged knob to `x` if it stays between the track edge and
    /// the other knob. Anything else is ignored; the gesture continues.
    fn move_knob(&mut self, x: f32) -> Option<RangeEvent> {
        let layout = self.layout?;
        if layout.track.is_degenerate() {
            return None;
        }

        self.drag = self.drag.resolve(&layout, x);
        match self.drag {
            DragState::Idle | DragState::DraggingEither => None,
            DragState::DraggingLeft => {
                if x < layout.track.start || x > layout.right.x() {
                    return None;
                }
                let percent = layout.track.x_to_percent(x);
                self.layout = Some(layout.with_left_x(x));
                self.min_percent = percent;
                log::debug!("Range start changed: {}", percent);
                Some(RangeEvent::RangeChanged { x, percent })
            }
            DragState::DraggingRight => {
                if x > layout.track.end || x < layout.left.x() {
                    return None;
                }
                let percent = layout.track.x_to_percent(x);
                self.layout = Some(layout.with_right_x(x));
                self.max_percent = percent;
                log::debug!("Range end changed: {}", percent);
                Some(RangeEvent::RangeChanged { x, percent })
            }
        }
    }

    /// Layout to read knob positions from, if it reflects the stored range
    fn live_layout(&self) -> Option<&SeekBarLayout> {
        self.layout
            .as_ref()
            .filter(|layout| !self.needs_layout && !layout.track.is_degenerate())
    }

    /// Lower bound in percent, read from the left knob position
    pub fn min_value(&self) -> i32 {
        match self.live_layout() {
            Some(layout) => layout.track.x_to_percent(layout.left.x()),
            None => self.min_percent,
        }
    }

    /// Upper bound in percent, read from the right knob position
    pub fn max_value(&self) -> i32 {
        match self.live_layout() {
            Some(layout) => layout.track.x_to_percent(layout.right.x()),
            None => self.max_percent,
        }
    }

    pub fn range_value(&self) -> (i32, i32) {
        (self.min_value(), self.max_value())
    }

    /// Replace the selected range.
    ///
    /// An inverted range is rejected without touching any state. Values
    /// outside 0..=100 are clamped. Knobs move on the next layout pass.
    pub fn set_range_value(&mut self, (min, max): (i32, i32)) -> Result<()> {
        check_range(min, max)?;
        self.min_percent = clamp_percent(min);
        self.max_percent = clamp_percent(max);
        self.drag = DragState::Idle;
        self.needs_layout = true;
        log::debug!("Range set to {}..={}", self.min_percent, self.max_percent);
        Ok(())
    }

    pub fn is_left_knob_enabled(&self) -> bool {
        self.left_knob_enabled
    }

    pub fn is_right_knob_enabled(&self) -> bool {
        self.right_knob_enabled
    }

    /// Enable or disable the left knob; disabling it ends a drag in progress.
    pub fn set_left_knob_enabled(&mut self, enabled: bool) {
        self.left_knob_enabled = enabled;
        if !enabled {
            self.drag = match self.drag {
                DragState::DraggingLeft => DragState::Idle,
                DragState::DraggingEither => DragState::DraggingRight,
                other => other,
            };
        }
    }

    /// Enable or disable the right knob; disabling it ends a drag in progress.
    pub fn set_right_knob_enabled(&mut self, enabled: bool) {
        self.right_knob_enabled = enabled;
        if !enabled {
            self.drag = match self.drag {
                DragState::DraggingRight => DragState::Idle,
                DragState::DraggingEither => DragState::DraggingLeft,
                other => other,
            };
        }
    }

    pub fn set_range_change_listener(&mut self, listener: impl RangeChangeListener + 'static) {
        self.listener = Some(Box::new(listener));
    }
}

fn clamp_percent(value: i32) -> i32 {
    value.clamp(MIN_PERCENT, MAX_PERCENT)
}
