//! Canvas that remembers what it was asked to draw

use glam::Vec2;
use serde::Serialize;

use super::{Canvas, Color};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Clear(Color),
    Line { a: Vec2, b: Vec2, color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
    Polygon { points: Vec<Vec2>, color: Color },
}

/// Records draw calls since the last clear
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Lines drawn in `color`
    pub fn count_lines(&self, color: Color) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { color: lc, .. } if *lc == color))
            .count()
    }

    /// Whether a filled circle in `color` was drawn
    pub fn has_circle(&self, color: Color) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Circle { color: cc, .. } if *cc == color))
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_line(&mut self, a: Vec2, b: Vec2, color: Color) {
        self.commands.push(DrawCommand::Line { a, b, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_closed_polygon(&mut self, points: &[Vec2], color: Color) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }
}
