//! The light source: a full fan of rays around a moving point

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ray::Ray;
use super::segment::Segment;
use crate::ray_count;

/// Fan of rays following the pointer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Emitter {
    pub pos: Vec2,
    /// Ordered by angle; the visibility polygon is built in this order
    rays: Vec<Ray>,
}

impl Emitter {
    /// Build a fan with one ray every `step_degrees`, starting at 0°
    pub fn new(pos: Vec2, step_degrees: f32) -> Self {
        let rays = (0..ray_count(step_degrees))
            .map(|i| Ray::new((i as f32 * step_degrees).to_radians()))
            .collect();
        Self { pos, rays }
    }

    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// Move the emitter. The position may leave the scene.
    pub fn update(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }

    /// Closest hit of one ray over every segment
    pub fn cast_nearest<'a>(
        &self,
        ray: &Ray,
        segments: impl IntoIterator<Item = &'a Segment>,
    ) -> Option<Vec2> {
        let mut closest = None;
        let mut record = f32::INFINITY;
        for segment in segments {
            if let Some(pt) = ray.cast(self.pos, segment) {
                let d = self.pos.distance(pt);
                if d < record {
                    record = d;
                    closest = Some(pt);
                }
            }
        }
        closest
    }

    /// Nearest hit point of every ray, in fan order.
    ///
    /// Rays that hit nothing are skipped, so the result may be shorter than
    /// the fan. Joining consecutive points gives the visibility polygon.
    pub fn compute_visibility<'a, I>(&self, segments: I) -> Vec<Vec2>
    where
        I: IntoIterator<Item = &'a Segment> + Clone,
    {
        self.rays
            .iter()
            .filter_map(|ray| self.cast_nearest(ray, segments.clone()))
            .collect()
    }

    /// How many rays of the fan hit `segment`, ignoring everything else
    pub fn count_hits(&self, segment: &Segment) -> usize {
        self.rays
            .iter()
            .filter(|ray| ray.cast(self.pos, segment).is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Bounds;

    fn unit_box(min: f32, max: f32) -> Vec<Segment> {
        vec![
            Segment::fixed(Vec2::new(min, min), Vec2::new(max, min)),
            Segment::fixed(Vec2::new(max, min), Vec2::new(max, max)),
            Segment::fixed(Vec2::new(max, max), Vec2::new(min, max)),
            Segment::fixed(Vec2::new(min, max), Vec2::new(min, min)),
        ]
    }

    fn assert_close(a: Vec2, b: Vec2) {
        assert!((a - b).length() < 1e-3, "{a} != {b}");
    }

    #[test]
    fn test_fan_order() {
        let emitter = Emitter::new(Vec2::ZERO, 1.0);
        assert_eq!(emitter.rays().len(), 360);
        for pair in emitter.rays().windows(2) {
            assert!(pair[0].angle < pair[1].angle);
        }
        assert_eq!(emitter.rays()[0].angle, 0.0);
    }

    #[test]
    fn test_four_rays_in_box() {
        let emitter = Emitter::new(Vec2::new(50.0, 50.0), 90.0);
        let walls = unit_box(0.0, 100.0);

        let hits = emitter.compute_visibility(&walls);
        assert_eq!(hits.len(), 4);
        // 0°, 90°, 180°, 270° with y pointing down
        assert_close(hits[0], Vec2::new(100.0, 50.0));
        assert_close(hits[1], Vec2::new(50.0, 100.0));
        assert_close(hits[2], Vec2::new(0.0, 50.0));
        assert_close(hits[3], Vec2::new(50.0, 0.0));
    }

    #[test]
    fn test_nearest_hit_wins() {
        let emitter = Emitter::new(Vec2::new(50.0, 50.0), 90.0);
        let mut walls = unit_box(0.0, 100.0);
        // Inner wall in front of the right edge
        walls.push(Segment::fixed(Vec2::new(70.0, 0.0), Vec2::new(70.0, 100.0)));

        let hits = emitter.compute_visibility(&walls);
        assert_close(hits[0], Vec2::new(70.0, 50.0));
        // Order of segments must not matter
        walls.reverse();
        assert_close(emitter.compute_visibility(&walls)[0], Vec2::new(70.0, 50.0));
    }

    #[test]
    fn test_missing_rays_are_skipped() {
        let emitter = Emitter::new(Vec2::new(50.0, 50.0), 90.0);
        // Only the right-hand wall
        let walls = vec![Segment::fixed(Vec2::new(100.0, 0.0), Vec2::new(100.0, 100.0))];
        let hits = emitter.compute_visibility(&walls);
        assert_eq!(hits.len(), 1);
        assert_close(hits[0], Vec2::new(100.0, 50.0));

        let nothing: Vec<Segment> = Vec::new();
        assert!(emitter.compute_visibility(&nothing).is_empty());
    }

    #[test]
    fn test_full_fan_inside_border() {
        let bounds = Bounds::new(400.0, 300.0);
        let mut emitter = Emitter::new(bounds.center(), 1.0);
        let border = Segment::border(bounds);

        let hits = emitter.compute_visibility(&border);
        assert!(hits.len() <= emitter.rays().len());
        // Every ray leaves a closed box somewhere; only corner rays may slip
        assert!(hits.len() >= 356);

        // Hits come back in angular order around the emitter
        let mut last = -1.0;
        for hit in &hits {
            let d = *hit - emitter.pos;
            let angle = d.y.atan2(d.x);
            let angle = if angle < -1e-3 {
                angle + std::f32::consts::TAU
            } else {
                angle.max(0.0)
            };
            assert!(angle + 1e-3 > last, "angle {angle} after {last}");
            last = angle;
        }

        // Emitter outside the scene still casts
        emitter.update(-50.0, 150.0);
        assert!(!emitter.compute_visibility(&border).is_empty());
    }

    #[test]
    fn test_count_hits() {
        let emitter = Emitter::new(Vec2::ZERO, 1.0);
        // Vertical wall spanning ±45° at x = 100
        let wall = Segment::fixed(Vec2::new(100.0, -100.0), Vec2::new(100.0, 100.0));
        let count = emitter.count_hits(&wall);
        // 315°..359° and 0°..45°, minus the exact corners
        assert!((89..=91).contains(&count), "count = {count}");
    }
}
