//! Ray vs. segment intersection
//!
//! A ray only carries its direction. The origin is handed in on every cast,
//! so the emitter can move without the rays holding on to its position.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::segment::Segment;

/// A half-line leaving the emitter at a fixed angle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Angle in radians, measured from +x toward +y
    pub angle: f32,
    /// Unit direction
    pub dir: Vec2,
}

impl Ray {
    pub fn new(angle: f32) -> Self {
        Self {
            angle,
            dir: Vec2::from_angle(angle),
        }
    }

    /// Intersect the ray starting at `origin` with `segment`.
    ///
    /// Uses the two-line determinant form with the segment as `(x1,y1)-(x2,y2)`
    /// and the ray as `(x3,y3)-(x4,y4)`. A hit needs `0 < t < 1` (segment
    /// endpoints excluded) and `u > 0` (strictly in front of the origin).
    /// Only an exactly zero determinant counts as parallel; near-parallel
    /// segments still return a point.
    pub fn cast(&self, origin: Vec2, segment: &Segment) -> Option<Vec2> {
        let (x1, y1) = (segment.a.x, segment.a.y);
        let (x2, y2) = (segment.b.x, segment.b.y);
        let (x3, y3) = (origin.x, origin.y);
        let (x4, y4) = (origin.x + self.dir.x, origin.y + self.dir.y);

        let den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
        if den == 0.0 {
            return None;
        }

        let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / den;
        let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / den;
        if t > 0.0 && t < 1.0 && u > 0.0 {
            let pt = Vec2::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1));
            pt.is_finite().then_some(pt)
        } else {
            None
        }
    }
}
