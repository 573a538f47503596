//! egui widgets for RangeSeekBar

mod range_slider;

pub use range_slider::RangeSlider;
