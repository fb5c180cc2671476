//! Flashlight - a ray-casting light over drifting walls
//!
//! Core modules:
//! - `sim`: Deterministic simulation (walls, rays, emitter, hidden ball)
//! - `renderer`: Drawing seam and the canvas implementations behind it
//! - `settings`: Data-driven tuning loaded from JSON

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Scene configuration constants
pub mod consts {
    /// Degrees between neighbouring rays of the emitter fan
    pub const RAY_STEP_DEGREES: f32 = 1.0;
    /// Finest accepted step (7200 rays)
    pub const MIN_RAY_STEP_DEGREES: f32 = 0.05;

    /// Number of random interior walls
    pub const WALL_COUNT: usize = 5;
    /// Distance an endpoint travels per active update
    pub const WALL_STEP: f32 = 2.0;
    /// Upper bound of the initial oscillator phase
    pub const WALL_PHASE_MAX: f32 = 1000.0;
    /// Oscillator phase advance per active update
    pub const WALL_SPEED_MIN: f32 = 0.01;
    pub const WALL_SPEED_MAX: f32 = 0.03;
    /// Border walls sit this far outside the top/left edges
    pub const BORDER_OFFSET: f32 = 1.0;

    /// Hidden ball defaults
    pub const TARGET_RADIUS: f32 = 45.0;
    /// Fraction of the remaining distance covered per tick
    pub const TARGET_LERP: f32 = 0.05;
    /// Closer than this counts as arrived
    pub const TARGET_ARRIVAL_DISTANCE: f32 = 1.0;
    /// Keep the initial spawn this far away from every edge
    pub const TARGET_SPAWN_MARGIN: f32 = 200.0;
    /// Rays that must cross the ball's proxy before it is drawn.
    /// Tuned for 360 rays and a 45 unit radius.
    pub const VISIBILITY_THRESHOLD: usize = 15;

    /// Radius of the dot drawn at the emitter
    pub const EMITTER_DOT_RADIUS: f32 = 2.0;

    pub const REVEAL_URL: &str = "https://www.example.com";
}

/// Number of rays in a full fan at the given angular step
#[inline]
pub fn ray_count(step_degrees: f32) -> usize {
    if step_degrees <= 0.0 || !step_degrees.is_finite() {
        return 0;
    }
    (360.0 / step_degrees).ceil() as usize
}
