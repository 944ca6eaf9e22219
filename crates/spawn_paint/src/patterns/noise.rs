//! Anisotropic radial scatter.
use std::f32::consts::TAU;

use rand::RngCore;

use crate::patterns::{polar, rand01, rand_inclusive, PatternGenerator, PatternSeed, PointStyle};
use crate::point::Point;

/// 30 to 60 points at random angles whose reach follows the radial profile
/// `0.5 + 0.5 * sin(3θ) * cos(5θ)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoisePattern;

impl NoisePattern {
    pub const COUNT: (usize, usize) = (30, 60);

    /// Reach multiplier in `[0, 1]` for direction `theta`.
    #[inline]
    pub fn profile(theta: f32) -> f32 {
        0.5 + 0.5 * (3.0 * theta).sin() * (5.0 * theta).cos()
    }
}

impl PatternGenerator for NoisePattern {
    fn generate(&self, seed: &PatternSeed, style: PointStyle, rng: &mut dyn RngCore) -> Vec<Point> {
        if !seed.is_valid() {
            return Vec::new();
        }
        let count = rand_inclusive(rng, Self::COUNT.0, Self::COUNT.1);
        (0..count)
            .map(|_| {
                let theta = rand01(rng) * TAU;
                let distance = rand01(rng) * seed.radius * Self::profile(theta);
                style.point_at(seed.center + polar(theta) * distance)
            })
            .collect()
    }
}
