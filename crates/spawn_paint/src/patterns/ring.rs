//! Evenly spaced ring.
use std::f32::consts::TAU;

use rand::RngCore;

use crate::patterns::{polar, Density, PatternGenerator, PatternSeed, PointStyle};
use crate::point::Point;

/// Ring radius as a fraction of the seed radius.
pub const RING_FACTOR: f32 = 0.7;

/// `count` points evenly spaced by angle at `0.7 * radius`.
#[derive(Debug, Clone)]
pub struct RingPattern {
    pub count: usize,
}

impl RingPattern {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    pub fn for_density(density: Density) -> Self {
        match density {
            Density::Compact => Self::new(12),
            Density::Full => Self::new(20),
        }
    }
}

impl PatternGenerator for RingPattern {
    fn generate(
        &self,
        seed: &PatternSeed,
        style: PointStyle,
        _rng: &mut dyn RngCore,
    ) -> Vec<Point> {
        if !seed.is_valid() || self.count == 0 {
            return Vec::new();
        }
        let r = seed.radius * RING_FACTOR;
        (0..self.count)
            .map(|i| {
                let angle = i as f32 / self.count as f32 * TAU;
                style.point_at(seed.center + polar(angle) * r)
            })
            .collect()
    }
}
