//! Seek bar state
//!
//! Configuration supplied at construction and the pointer gesture state
//! machine, kept apart from the widget so both can be tested in isolation.

mod config;
mod drag;

pub use config::SeekBarConfig;
pub(crate) use config::check_range;
pub use drag::DragState;
