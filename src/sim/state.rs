//! Scene state and core simulation types
//!
//! Everything one session needs lives in [`SceneState`]; nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::emitter::Emitter;
use super::segment::Segment;
use super::target::TargetObject;
use crate::Settings;

/// Something the driver has to act on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneEvent {
    /// The hidden ball was caught: open this resource
    Reveal { url: String },
}

/// Complete scene state
#[derive(Debug, Clone, Serialize)]
pub struct SceneState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub bounds: Bounds,
    /// Drifting interior walls
    pub walls: Vec<Segment>,
    /// Static rectangle around the scene, rebuilt on resize
    pub border: [Segment; 4],
    pub emitter: Emitter,
    pub target: TargetObject,
    /// Ticks run so far
    pub frame: u64,
    pub settings: Settings,
    #[serde(skip)]
    rng: Pcg32,
}

impl SceneState {
    /// Create a new scene with the given seed
    pub fn new(bounds: Bounds, settings: Settings, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let walls = (0..settings.wall_count)
            .map(|_| Segment::random(bounds, &mut rng, &settings))
            .collect();
        let emitter = Emitter::new(bounds.center(), settings.ray_step_degrees);
        let target = TargetObject::spawn(bounds, &mut rng, &settings);

        log::info!(
            "Scene {}x{} with {} walls, {} rays (seed {})",
            bounds.width,
            bounds.height,
            settings.wall_count,
            emitter.rays().len(),
            seed
        );

        Self {
            seed,
            bounds,
            walls,
            border: Segment::border(bounds),
            emitter,
            target,
            frame: 0,
            settings,
            rng,
        }
    }

    /// Adopt new bounds. Only the border is rebuilt; interior walls, the
    /// ray fan and the ball keep their state and are clamped or sampled
    /// against the new bounds from now on.
    pub fn resize(&mut self, bounds: Bounds) {
        if bounds == self.bounds {
            return;
        }
        log::debug!(
            "Resize {}x{} -> {}x{}",
            self.bounds.width,
            self.bounds.height,
            bounds.width,
            bounds.height
        );
        self.bounds = bounds;
        self.border = Segment::border(bounds);
    }

    /// Interior walls followed by the border
    pub fn segments(&self) -> impl Iterator<Item = &Segment> + Clone {
        self.walls.iter().chain(self.border.iter())
    }

    /// Walls only drift while the pointer is away from the center
    pub fn walls_active(&self, pointer: Vec2) -> bool {
        pointer.distance(self.bounds.center()) > self.bounds.width / 4.0
    }

    /// Advance every interior wall
    pub fn update_walls(&mut self, active: bool) {
        let bounds = self.bounds;
        for wall in &mut self.walls {
            wall.update(active, bounds);
        }
    }

    /// Move the ball one step unless it has been caught
    pub fn move_target(&mut self) {
        let bounds = self.bounds;
        self.target.move_step(bounds, &mut self.rng);
    }
}
