//! Draw commands and the egui painter backend
//!
//! The seek bar only describes what to draw; a host turns the command list
//! into actual primitives. [`paint`] does that for egui.

use egui::{Color32, Painter, Pos2, Rect, Vec2};

/// One primitive in widget-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    RoundedRect {
        rect: Rect,
        corner_radius: f32,
        color: Color32,
    },
    Circle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
}

impl DrawCommand {
    /// Same primitive shifted by `offset`
    pub fn translate(self, offset: Vec2) -> Self {
        match self {
            DrawCommand::RoundedRect {
                rect,
                corner_radius,
                color,
            } => DrawCommand::RoundedRect {
                rect: rect.translate(offset),
                corner_radius,
                color,
            },
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => DrawCommand::Circle {
                center: center + offset,
                radius,
                color,
            },
        }
    }
}

/// Paint commands with their local origin placed at `origin`.
pub fn paint(painter: &Painter, origin: Pos2, commands: &[DrawCommand]) {
    profiling::scope!("paint_range_seek_bar");
    let offset = origin.to_vec2();
    for command in commands {
        match command.translate(offset) {
            DrawCommand::RoundedRect {
                rect,
                corner_radius,
                color,
            } => {
                painter.rect_filled(rect, corner_radius, color);
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                painter.circle_filled(center, radius, color);
            }
        }
    }
}
