//! Pointer gesture state

use crate::geometry::SeekBarLayout;

/// Which knob, if any, the current gesture is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingLeft,
    DraggingRight,
    /// Both coincident knobs were pressed; the first accepted move decides
    DraggingEither,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        !matches!(self, DragState::Idle)
    }

    /// Resolve a press at `x` to a drag state.
    ///
    /// When both hit boxes contain `x` the nearest center wins, the left on
    /// an exact midpoint. Coincident knobs stay undecided until the pointer
    /// moves, so the pair can be pulled apart in either direction.
    pub fn for_press(layout: &SeekBarLayout, x: f32, left_enabled: bool, right_enabled: bool) -> Self {
        let left_hit = left_enabled && layout.left.hit(x);
        let right_hit = right_enabled && layout.right.hit(x);

        match (left_hit, right_hit) {
            (false, false) => DragState::Idle,
            (true, false) => DragState::DraggingLeft,
            (false, true) => DragState::DraggingRight,
            (true, true) if layout.left.x() == layout.right.x() => DragState::DraggingEither,
            (true, true) => {
                let to_left = (x - layout.left.x()).abs();
                let to_right = (x - layout.right.x()).abs();
                if to_right < to_left {
                    DragState::DraggingRight
                } else {
                    DragState::DraggingLeft
                }
            }
        }
    }

    /// Pick the knob for a move to `x` while undecided.
    ///
    /// Moving below the coincident knobs takes the left one, above takes the
    /// right one. A move the chosen knob could not follow (onto the knobs or
    /// off the track) leaves the gesture undecided.
    pub fn resolve(self, layout: &SeekBarLayout, x: f32) -> Self {
        if self != DragState::DraggingEither {
            return self;
        }
        let knob_x = layout.left.x();
        if x < knob_x && x >= layout.track.start {
            DragState::DraggingLeft
        } else if x > knob_x && x <= layout.track.end {
            DragState::DraggingRight
        } else {
            self
        }
    }
}
