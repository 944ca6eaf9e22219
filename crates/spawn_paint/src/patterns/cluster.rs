//! Compact cluster around the seed center.
use std::f32::consts::TAU;

use rand::RngCore;

use crate::patterns::{polar, rand01, Density, PatternGenerator, PatternSeed, PointStyle};
use crate::point::Point;

/// Fraction of the seed radius the cluster may reach.
pub const CLUSTER_REACH: f32 = 0.8;

/// Points at a random angle and a uniformly drawn distance up to
/// `0.8 * radius`.
///
/// The distance is uniform in radius, not in area, so density peaks at the
/// center. Visual tuning downstream relies on that bias.
#[derive(Debug, Clone)]
pub struct ClusterPattern {
    pub count: usize,
}

impl ClusterPattern {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    pub fn for_density(density: Density) -> Self {
        match density {
            Density::Compact => Self::new(15),
            Density::Full => Self::new(25),
        }
    }
}

impl PatternGenerator for ClusterPattern {
    fn generate(&self, seed: &PatternSeed, style: PointStyle, rng: &mut dyn RngCore) -> Vec<Point> {
        if !seed.is_valid() {
            return Vec::new();
        }
        (0..self.count)
            .map(|_| {
                let angle = rand01(rng) * TAU;
                let distance = rand01(rng) * seed.radius * CLUSTER_REACH;
                style.point_at(seed.center + polar(angle) * distance)
            })
            .collect()
    }
}
