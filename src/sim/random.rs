//! Uniform random source used for wall placement and waypoints

use rand::Rng;
use rand_pcg::Pcg32;

/// Anything that can hand out uniform samples
pub trait RandomSource {
    /// Uniform sample in `[min, max)`.
    ///
    /// An empty or inverted range yields its midpoint, so a window smaller
    /// than the requested inset still produces a usable position. So does a
    /// range too wide to represent.
    fn uniform(&mut self, min: f32, max: f32) -> f32;
}

impl RandomSource for Pcg32 {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if max > min && (max - min).is_finite() {
            self.random_range(min..max)
        } else {
            min * 0.5 + max * 0.5
        }
    }
}
