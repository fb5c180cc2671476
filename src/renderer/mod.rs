//! Drawing seam
//!
//! The simulation never draws. A driver hands [`draw_frame`] something that
//! implements [`Canvas`]: the browser's 2D context, or a [`RecordingCanvas`]
//! for headless runs and tests.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod recording;

pub use recording::{DrawCommand, RecordingCanvas};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::EMITTER_DOT_RADIUS;
use crate::sim::{FrameReport, SceneState};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// CSS `rgba()` string
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            self.a as f32 / 255.0
        )
    }
}

/// Colors for scene elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = Color::rgb(0, 0, 0);
    pub const WALL: Color = Color::rgb(255, 255, 255);
    pub const RAY: Color = Color::rgba(200, 0, 150, 200); // Translucent purple
    pub const POLYGON: Color = Color::rgba(0, 255, 0, 100);
    pub const EMITTER: Color = Color::rgb(255, 255, 255);
    pub const TARGET: Color = Color::rgb(0, 255, 0);
}

/// Primitive drawing operations a render surface has to offer
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn draw_line(&mut self, a: Vec2, b: Vec2, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Outline through `points`, closed back to the first one
    fn stroke_closed_polygon(&mut self, points: &[Vec2], color: Color);
}

/// Draw one frame: walls, light rays, visibility polygon, emitter, and the
/// ball if the vote said it is lit.
pub fn draw_frame(canvas: &mut impl Canvas, state: &SceneState, report: &FrameReport) {
    canvas.clear(colors::BACKGROUND);

    for segment in state.segments() {
        canvas.draw_line(segment.a, segment.b, colors::WALL);
    }

    let origin = state.emitter.pos;
    for hit in &report.hits {
        canvas.draw_line(origin, *hit, colors::RAY);
    }
    // Fewer than three points do not enclose anything
    if report.hits.len() > 2 {
        canvas.stroke_closed_polygon(&report.hits, colors::POLYGON);
    }

    canvas.fill_circle(origin, EMITTER_DOT_RADIUS, colors::EMITTER);

    if report.target_visible {
        canvas.fill_circle(report.target_pos, report.target_radius, colors::TARGET);
    }
}
