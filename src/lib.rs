//! RangeSeekBar: a dual-knob percentage range slider
//!
//! The core ([`RangeSeekBar`]) is independent of any rendering surface: it
//! is measured, asked for draw commands and fed pointer events. The
//! [`widgets::RangeSlider`] adapter hosts it inside an egui `Ui`.

// Widget-wide constants
pub mod constants;

// Error handling
pub mod error;

pub mod events;
pub mod geometry;
pub mod render;
pub mod seekbar;

// Configuration and drag state
pub mod state;

// egui widgets
pub mod widgets;

pub use error::{Result, SeekBarError};
pub use events::{InputResponse, PointerEvent, RangeChangeListener, RangeEvent};
pub use seekbar::RangeSeekBar;
pub use state::{DragState, SeekBarConfig};
