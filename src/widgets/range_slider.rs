//! egui adapter for the range seek bar

use egui::{Id, Response, Sense, Ui, Vec2};

use crate::constants::dimensions::FALLBACK_WIDTH;
use crate::events::PointerEvent;
use crate::render;
use crate::seekbar::RangeSeekBar;

/// Shows a [`RangeSeekBar`] in a `Ui`, translating egui pointer input into
/// [`PointerEvent`]s.
///
/// The seek bar keeps all state; the widget only remembers whether the
/// current press started on it.
pub struct RangeSlider<'a> {
    bar: &'a mut RangeSeekBar,
    width: Option<f32>,
    id_salt: Option<Id>,
}

impl<'a> RangeSlider<'a> {
    /// Create a new range slider widget
    pub fn new(bar: &'a mut RangeSeekBar) -> Self {
        Self {
            bar,
            width: None,
            id_salt: None,
        }
    }

    /// Use a fixed width instead of the available width
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Distinguish several sliders laid out at the same position
    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id_salt = Some(Id::new(salt));
        self
    }

    /// Show the widget
    pub fn show(self, ui: &mut Ui) -> Response {
        profiling::scope!("render_range_slider");

        let mut width = self.width.unwrap_or_else(|| ui.available_width());
        if !width.is_finite() {
            width = FALLBACK_WIDTH;
        }

        let bar = self.bar;
        let stale = bar.layout().map(|layout| layout.size.x) != Some(width);
        if stale || bar.needs_layout() {
            bar.measure(width);
        }
        let size = bar.layout().map(|layout| layout.size).unwrap_or_default();

        let (rect, mut response) = ui.allocate_exact_size(size, Sense::click_and_drag());
        let gesture_id = match self.id_salt {
            Some(salt) => response.id.with(salt),
            None => response.id,
        }
        .with("gesture");

        let (pressed, released, moved, pointer) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.delta() != Vec2::ZERO,
                i.pointer.interact_pos(),
            )
        });
        let mut active = ui.data(|d| d.get_temp::<bool>(gesture_id).unwrap_or(false));
        let mut events = Vec::new();

        if pressed && response.contains_pointer() {
            if let Some(pos) = pointer {
                active = true;
                events.push(PointerEvent::Press(pos.x - rect.left()));
            }
        } else if active {
            match pointer {
                Some(pos) if moved => events.push(PointerEvent::Move(pos.x - rect.left())),
                Some(_) => {}
                None => {
                    active = false;
                    events.push(PointerEvent::Cancel);
                }
            }
        }
        if active && released {
            active = false;
            events.push(PointerEvent::Release);
        }
        ui.data_mut(|d| d.insert_temp(gesture_id, active));

        for event in events {
            let outcome = bar.handle_input(event);
            if outcome.changed() {
                response.mark_changed();
            }
            // Keep the gesture from being handed to an enclosing scroll area.
            if outcome.capture {
                ui.ctx().set_dragged_id(response.id);
            }
        }

        if ui.is_rect_visible(rect) {
            render::paint(ui.painter(), rect.min, &bar.render());
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::RangeEvent;
    use crate::state::{DragState, SeekBarConfig};

    fn run_frame(ctx: &egui::Context, bar: &mut RangeSeekBar, width: f32) -> Response {
        run_frame_with(ctx, bar, width, Vec::new())
    }

    fn run_frame_with(
        ctx: &egui::Context,
        bar: &mut RangeSeekBar,
        width: f32,
        events: Vec<egui::Event>,
    ) -> Response {
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let mut response = None;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                response = Some(RangeSlider::new(bar).width(width).show(ui));
            });
        });
        response.expect("slider was shown")
    }

    #[test]
    fn test_show_lays_out_seek_bar() {
        let ctx = egui::Context::default();
        let mut bar = RangeSeekBar::new(SeekBarConfig::new().range(20, 80).knob_radius(10.0)).unwrap();

        let response = run_frame(&ctx, &mut bar, 120.0);
        assert_eq!(response.rect.width(), 120.0);
        assert_eq!(response.rect.height(), 20.0);
        assert!(!response.changed());
        assert_eq!(bar.range_value(), (20, 80));
    }

    #[test]
    fn test_show_relayouts_after_set_range() {
        let ctx = egui::Context::default();
        let mut bar = RangeSeekBar::new(SeekBarConfig::new().knob_radius(10.0)).unwrap();
        run_frame(&ctx, &mut bar, 120.0);

        bar.set_range_value((40, 60)).unwrap();
        run_frame(&ctx, &mut bar, 120.0);
        assert!(!bar.needs_layout());

        let layout = bar.layout().unwrap();
        assert_eq!(layout.left.x(), 50.0);
        assert_eq!(layout.right.x(), 70.0);
    }

    fn button(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    #[test]
    fn test_drag_through_pointer_input() {
        let ctx = egui::Context::default();
        let mut bar = RangeSeekBar::new(SeekBarConfig::new().knob_radius(10.0)).unwrap();
        let (tx, rx) = std::sync::mpsc::channel();
        bar.set_range_change_listener(tx);

        // Track spans local x in [10, 110]; one percent per pixel.
        let rect = run_frame(&ctx, &mut bar, 120.0).rect;
        let knob = egui::pos2(rect.left() + 10.0, rect.center().y);

        run_frame_with(&ctx, &mut bar, 120.0, vec![egui::Event::PointerMoved(knob)]);
        let response = run_frame_with(&ctx, &mut bar, 120.0, vec![button(knob, true)]);
        assert!(!response.changed());
        assert_eq!(bar.drag_state(), DragState::DraggingLeft);

        // The first frame of movement after the press already moves the knob.
        let target = knob + egui::vec2(40.0, 0.0);
        let response =
            run_frame_with(&ctx, &mut bar, 120.0, vec![egui::Event::PointerMoved(target)]);
        assert!(response.changed());
        assert_eq!(bar.range_value(), (40, 100));

        run_frame_with(&ctx, &mut bar, 120.0, vec![button(target, false)]);
        assert_eq!(bar.drag_state(), DragState::Idle);

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                RangeEvent::RangeChanged { x: 50.0, percent: 40 },
                RangeEvent::DragCompleted
            ]
        );
    }
}
