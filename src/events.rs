//! Input and notification types crossing the widget boundary

use std::sync::mpsc::Sender;

/// Pointer input in the widget's local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press(f32),
    Move(f32),
    Release,
    Cancel,
}

/// Notification emitted by the seek bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeEvent {
    /// A knob moved to `x`, now at `percent`
    RangeChanged { x: f32, percent: i32 },
    /// The pointer was released, ending the gesture
    DragCompleted,
}

/// Result of feeding one pointer event to the seek bar
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputResponse {
    pub events: Vec<RangeEvent>,
    /// The host should not hand this gesture to another widget
    pub capture: bool,
}

impl InputResponse {
    pub fn changed(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, RangeEvent::RangeChanged { .. }))
    }

    pub fn completed(&self) -> bool {
        self.events.contains(&RangeEvent::DragCompleted)
    }
}

/// Receives range notifications as they happen
pub trait RangeChangeListener {
    fn on_range_changed(&mut self, x: f32, percent: i32);

    fn on_change_done(&mut self);

    fn notify(&mut self, event: &RangeEvent) {
        match *event {
            RangeEvent::RangeChanged { x, percent } => self.on_range_changed(x, percent),
            RangeEvent::DragCompleted => self.on_change_done(),
        }
    }
}

/// Forward events over a channel; a dropped receiver is ignored.
impl RangeChangeListener for Sender<RangeEvent> {
    fn on_range_changed(&mut self, x: f32, percent: i32) {
        let _ = self.send(RangeEvent::RangeChanged { x, percent });
    }

    fn on_change_done(&mut self) {
        let _ = self.send(RangeEvent::DragCompleted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_sender_forwards_events() {
        let (mut tx, rx) = mpsc::channel();
        tx.notify(&RangeEvent::RangeChanged { x: 4.0, percent: 2 });
        tx.notify(&RangeEvent::DragCompleted);

        let received: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            received,
            vec![
                RangeEvent::RangeChanged { x: 4.0, percent: 2 },
                RangeEvent::DragCompleted
            ]
        );
    }

    #[test]
    fn test_sender_survives_dropped_receiver() {
        let (mut tx, rx) = mpsc::channel();
        drop(rx);
        tx.on_change_done();
    }

    #[test]
    fn test_response_flags() {
        let response = InputResponse {
            events: vec![RangeEvent::DragCompleted],
            capture: false,
        };
        assert!(response.completed());
        assert!(!response.changed());
    }
}
