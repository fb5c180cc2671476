//! Deterministic simulation module
//!
//! All scene logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (fan order for rays, insertion order for walls)
//! - No rendering or platform dependencies

pub mod bounds;
pub mod emitter;
pub mod random;
pub mod ray;
pub mod segment;
pub mod state;
pub mod target;
pub mod tick;

pub use bounds::Bounds;
pub use emitter::Emitter;
pub use random::RandomSource;
pub use ray::Ray;
pub use segment::{Oscillator, Segment};
pub use state::{SceneEvent, SceneState};
pub use target::{Motion, TargetObject};
pub use tick::{FrameReport, TickInput, handle_click, tick};
