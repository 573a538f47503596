use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};

use eframe::egui;
use range_seek_bar::constants::config::CONFIG_FILE;
use range_seek_bar::widgets::RangeSlider;
use range_seek_bar::{RangeEvent, RangeSeekBar, SeekBarConfig, SeekBarError};

/// Number of listener events kept in the log panel
const EVENT_LOG_LEN: usize = 12;

pub struct SeekBarDemo {
    bar: RangeSeekBar,
    events: Receiver<RangeEvent>,
    event_log: Vec<RangeEvent>,
    completed_drags: usize,

    /// Pending values for an explicit range assignment
    range_input: (i32, i32),
    config_path: PathBuf,
    error_message: Option<(String, String)>,
}

impl SeekBarDemo {
    pub fn new(config: SeekBarConfig, config_path: PathBuf) -> Result<Self, SeekBarError> {
        let range_input = (config.min_percentage, config.max_percentage);
        let mut bar = RangeSeekBar::new(config)?;
        let (tx, rx) = mpsc::channel();
        bar.set_range_change_listener(tx);

        Ok(Self {
            bar,
            events: rx,
            event_log: Vec::new(),
            completed_drags: 0,
            range_input,
            config_path,
            error_message: None,
        })
    }

    /// Path of the config file in the working directory
    pub fn default_config_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE)
    }

    fn set_error(&mut self, err: &SeekBarError) {
        log::warn!("{}", err);
        self.error_message = Some((err.title().to_string(), err.user_message()));
    }

    fn drain_events(&mut self) {
        for event in self.events.try_iter() {
            if event == RangeEvent::DragCompleted {
                self.completed_drags += 1;
                self.range_input = self.bar.range_value();
            }
            self.event_log.push(event);
        }
        if self.event_log.len() > EVENT_LOG_LEN {
            let excess = self.event_log.len() - EVENT_LOG_LEN;
            self.event_log.drain(..excess);
        }
    }

    fn apply_range(&mut self) {
        if let Err(e) = self.bar.set_range_value(self.range_input) {
            self.set_error(&e);
        }
    }

    fn save_config(&mut self) {
        let (min, max) = self.bar.range_value();
        let mut config = self.bar.config().clone().range(min, max);
        config.left_knob_enabled = self.bar.is_left_knob_enabled();
        config.right_knob_enabled = self.bar.is_right_knob_enabled();

        match config.save(&self.config_path) {
            Ok(()) => log::info!("Saved config to {:?}", self.config_path),
            Err(e) => self.set_error(&e),
        }
    }

    fn load_config(&mut self) {
        match SeekBarConfig::load(&self.config_path) {
            Ok(config) => match Self::new(config, self.config_path.clone()) {
                Ok(demo) => *self = demo,
                Err(e) => self.set_error(&e),
            },
            Err(e) => self.set_error(&e),
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Range:");
            ui.add(egui::DragValue::new(&mut self.range_input.0).range(0..=100).suffix("%"));
            ui.add(egui::DragValue::new(&mut self.range_input.1).range(0..=100).suffix("%"));
            if ui.button("Apply").clicked() {
                self.apply_range();
            }

            ui.separator();

            let mut left = self.bar.is_left_knob_enabled();
            if ui.checkbox(&mut left, "Left knob").changed() {
                self.bar.set_left_knob_enabled(left);
            }
            let mut right = self.bar.is_right_knob_enabled();
            if ui.checkbox(&mut right, "Right knob").changed() {
                self.bar.set_right_knob_enabled(right);
            }

            ui.separator();

            if ui.button("Save config").clicked() {
                self.save_config();
            }
            if ui.button("Load config").clicked() {
                self.load_config();
            }
        });
    }

    fn render_error_dialog(&mut self, ctx: &egui::Context) {
        let Some((title, message)) = self.error_message.clone() else {
            return;
        };
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    self.error_message = None;
                }
            });
    }
}

impl eframe::App for SeekBarDemo {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.render_controls(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(16.0);
            RangeSlider::new(&mut self.bar).show(ui);
            self.drain_events();

            ui.add_space(16.0);
            let (min, max) = self.bar.range_value();
            ui.heading(format!("{}% – {}%", min, max));
            ui.label(format!("Drag state: {:?}", self.bar.drag_state()));
            ui.label(format!("Completed drags: {}", self.completed_drags));

            ui.separator();
            ui.label("Listener events:");
            for event in self.event_log.iter().rev() {
                match event {
                    RangeEvent::RangeChanged { x, percent } => {
                        ui.monospace(format!("RangeChanged x={:.1} percent={}", x, percent));
                    }
                    RangeEvent::DragCompleted => {
                        ui.monospace("DragCompleted");
                    }
                }
            }
        });

        self.render_error_dialog(ctx);
        profiling::finish_frame!();
    }
}
