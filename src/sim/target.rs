//! The hidden ball
//!
//! It wanders between random waypoints and is only drawn once enough rays of
//! the fan cross it. The crossing test uses one diagonal of the ball's
//! bounding square as a stand-in for its silhouette, so the threshold is
//! only meaningful for the default ray density and radius.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::emitter::Emitter;
use super::random::RandomSource;
use super::segment::Segment;
use crate::Settings;

/// Whether the ball still wanders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Motion {
    /// Heading for the current waypoint (re-targets on arrival)
    Seeking,
    /// Caught by a click; never moves again
    Stopped,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetObject {
    pub pos: Vec2,
    /// Current waypoint
    pub target: Vec2,
    pub radius: f32,
    /// Fraction of the remaining distance covered per move
    pub lerp: f32,
    pub arrival_distance: f32,
    /// Rays needed to count as visible
    pub threshold: usize,
    pub motion: Motion,
}

impl TargetObject {
    /// A ball at `pos` whose first move picks a waypoint
    pub fn new(pos: Vec2, settings: &Settings) -> Self {
        Self {
            pos,
            target: pos,
            radius: settings.target_radius,
            lerp: settings.target_lerp,
            arrival_distance: settings.target_arrival_distance,
            threshold: settings.visibility_threshold,
            motion: Motion::Seeking,
        }
    }

    /// Spawn somewhere inside `bounds`, keeping `margin` away from the edges
    pub fn spawn(bounds: Bounds, rng: &mut impl RandomSource, settings: &Settings) -> Self {
        let margin = settings.target_spawn_margin;
        let (x_min, x_max) = bounds.x_range(margin);
        let (y_min, y_max) = bounds.y_range(margin);
        let pos = Vec2::new(rng.uniform(x_min, x_max), rng.uniform(y_min, y_max));
        Self::new(pos, settings)
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.motion == Motion::Stopped
    }

    /// Advance one tick: pick a new waypoint on arrival, otherwise ease
    /// toward the current one.
    pub fn move_step(&mut self, bounds: Bounds, rng: &mut impl RandomSource) {
        if self.is_stopped() {
            return;
        }
        if self.pos.distance(self.target) < self.arrival_distance {
            let (x_min, x_max) = bounds.x_range(self.radius);
            let (y_min, y_max) = bounds.y_range(self.radius);
            self.target = Vec2::new(rng.uniform(x_min, x_max), rng.uniform(y_min, y_max));
            log::trace!("Ball heading for ({:.1}, {:.1})", self.target.x, self.target.y);
        } else {
            self.pos = self.pos.lerp(self.target, self.lerp);
        }
    }

    /// Diagonal of the bounding square, top-left to bottom-right
    pub fn proxy_segment(&self) -> Segment {
        let r = Vec2::splat(self.radius);
        Segment::fixed(self.pos - r, self.pos + r)
    }

    /// Rays of the fan crossing the proxy diagonal. Walls do not block.
    pub fn hit_count(&self, emitter: &Emitter) -> usize {
        emitter.count_hits(&self.proxy_segment())
    }

    pub fn compute_visible(&self, emitter: &Emitter) -> bool {
        self.is_lit(self.hit_count(emitter))
    }

    /// Visibility vote for an already counted number of ray hits
    #[inline]
    pub fn is_lit(&self, hits: usize) -> bool {
        hits >= self.threshold
    }

    /// Whether `point` lies strictly within the radius
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance(point) < self.radius
    }

    /// Freeze the ball. Returns false if it was already stopped.
    pub fn stop(&mut self) -> bool {
        if self.is_stopped() {
            return false;
        }
        self.motion = Motion::Stopped;
        true
    }
}
