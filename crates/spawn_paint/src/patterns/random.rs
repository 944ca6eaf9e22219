//! Center-weighted random scatter.
use std::f32::consts::TAU;

use rand::RngCore;

use crate::patterns::{polar, rand01, Density, PatternGenerator, PatternSeed, PointStyle};
use crate::point::Point;

/// Points at a uniform angle and a uniform distance up to the full radius.
///
/// Uniform in radius rather than area, so the scatter is denser near the
/// center than a disk-uniform sample would be.
#[derive(Debug, Clone)]
pub struct RandomPattern {
    pub count: usize,
}

impl RandomPattern {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    pub fn for_density(density: Density) -> Self {
        match density {
            Density::Compact => Self::new(20),
            Density::Full => Self::new(35),
        }
    }
}

impl PatternGenerator for RandomPattern {
    fn generate(&self, seed: &PatternSeed, style: PointStyle, rng: &mut dyn RngCore) -> Vec<Point> {
        if !seed.is_valid() {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let angle = rand01(rng) * TAU;
            let distance = rand01(rng) * seed.radius;
            out.push(style.point_at(seed.center + polar(angle) * distance));
        }
        out
    }
}
