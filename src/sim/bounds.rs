//! Scene rectangle
//!
//! Everything lives in `[0, width] × [0, height]` screen space, y pointing down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The rectangle walls are clamped to and waypoints are sampled from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a point into the rectangle
    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }

    /// Horizontal range shrunk by `inset` on both sides
    #[inline]
    pub fn x_range(&self, inset: f32) -> (f32, f32) {
        (inset, self.width - inset)
    }

    /// Vertical range shrunk by `inset` on both sides
    #[inline]
    pub fn y_range(&self, inset: f32) -> (f32, f32) {
        (inset, self.height - inset)
    }
}
