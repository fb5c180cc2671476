//! Browser canvas backend (HTML canvas 2D context)

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::{Canvas, Color};

impl Canvas for CanvasRenderingContext2d {
    fn clear(&mut self, color: Color) {
        let Some(canvas) = self.canvas() else {
            return;
        };
        self.set_fill_style_str(&color.to_css());
        self.fill_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    }

    fn draw_line(&mut self, a: Vec2, b: Vec2, color: Color) {
        self.set_stroke_style_str(&color.to_css());
        self.begin_path();
        self.move_to(a.x as f64, a.y as f64);
        self.line_to(b.x as f64, b.y as f64);
        self.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.set_fill_style_str(&color.to_css());
        self.begin_path();
        if let Err(e) = self.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.fill();
    }

    fn stroke_closed_polygon(&mut self, points: &[Vec2], color: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.set_stroke_style_str(&color.to_css());
        self.begin_path();
        self.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.line_to(p.x as f64, p.y as f64);
        }
        self.close_path();
        self.stroke();
    }
}
