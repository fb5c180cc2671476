//! Wall segments
//!
//! Interior walls drift: each endpoint follows its own sine/cosine path and is
//! clamped back into the scene afterwards. Clamping (not reflecting) lets an
//! endpoint stick to an edge and slide along it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::random::RandomSource;
use crate::Settings;
use crate::consts::BORDER_OFFSET;

/// Oscillation state of one endpoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oscillator {
    /// Current phase (radians, grows without bound)
    pub phase: f32,
    /// Phase advance per active update
    pub speed: f32,
}

impl Oscillator {
    pub fn new(phase: f32, speed: f32) -> Self {
        Self { phase, speed }
    }

    /// A still oscillator (border walls)
    pub fn still() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Offset for the current phase, then advance
    #[inline]
    fn advance(&mut self, step: f32) -> Vec2 {
        let offset = Vec2::new(self.phase.sin(), self.phase.cos()) * step;
        self.phase += self.speed;
        offset
    }

    fn random(rng: &mut impl RandomSource, settings: &Settings) -> Self {
        Self {
            phase: rng.uniform(0.0, settings.wall_phase_max),
            speed: rng.uniform(settings.wall_speed_min, settings.wall_speed_max),
        }
    }
}

/// A line obstacle rays can hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
    pub osc_a: Oscillator,
    pub osc_b: Oscillator,
    /// Distance an endpoint moves per active update
    pub step: f32,
}

impl Segment {
    /// A segment that never moves
    pub fn fixed(a: Vec2, b: Vec2) -> Self {
        Self {
            a,
            b,
            osc_a: Oscillator::still(),
            osc_b: Oscillator::still(),
            step: 0.0,
        }
    }

    pub fn with_motion(a: Vec2, b: Vec2, osc_a: Oscillator, osc_b: Oscillator, step: f32) -> Self {
        Self {
            a,
            b,
            osc_a,
            osc_b,
            step,
        }
    }

    /// A drifting wall with both endpoints anywhere inside `bounds`
    pub fn random(bounds: Bounds, rng: &mut impl RandomSource, settings: &Settings) -> Self {
        let x1 = rng.uniform(0.0, bounds.width);
        let x2 = rng.uniform(0.0, bounds.width);
        let y1 = rng.uniform(0.0, bounds.height);
        let y2 = rng.uniform(0.0, bounds.height);
        let osc_a = Oscillator::random(rng, settings);
        let osc_b = Oscillator::random(rng, settings);
        Self::with_motion(
            Vec2::new(x1, y1),
            Vec2::new(x2, y2),
            osc_a,
            osc_b,
            settings.wall_step,
        )
    }

    /// The four walls enclosing the scene, clockwise from the top edge.
    ///
    /// The top and left edges sit one unit outside the scene so a ray running
    /// along `x = 0` or `y = 0` still finds a wall.
    pub fn border(bounds: Bounds) -> [Segment; 4] {
        let (w, h) = (bounds.width, bounds.height);
        let o = -BORDER_OFFSET;
        [
            Segment::fixed(Vec2::new(o, o), Vec2::new(w, o)),
            Segment::fixed(Vec2::new(w, o), Vec2::new(w, h)),
            Segment::fixed(Vec2::new(w, h), Vec2::new(o, h)),
            Segment::fixed(Vec2::new(o, h), Vec2::new(o, o)),
        ]
    }

    /// Advance both endpoints one step along their oscillation paths.
    ///
    /// Does nothing while `active` is false.
    pub fn update(&mut self, active: bool, bounds: Bounds) {
        if !active {
            return;
        }
        self.a += self.osc_a.advance(self.step);
        self.b += self.osc_b.advance(self.step);

        self.a = bounds.clamp(self.a);
        self.b = bounds.clamp(self.b);
    }
}
