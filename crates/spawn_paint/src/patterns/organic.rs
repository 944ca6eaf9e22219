//! Two-level hierarchical scatter.
use std::f32::consts::TAU;

use rand::RngCore;

use crate::patterns::{
    polar, rand01, rand_inclusive, rand_range, PatternGenerator, PatternSeed, PointStyle,
};
use crate::point::Point;

/// 3 to 5 sub-cluster centers within `0.6 * r` of the seed, each spawning
/// 8 to 19 points within `0.3 * r` of its own center.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrganicPattern;

impl OrganicPattern {
    pub const CLUSTERS: (usize, usize) = (3, 5);
    pub const POINTS_PER_CLUSTER: (usize, usize) = (8, 19);
    pub const CENTER_REACH: f32 = 0.6;
    pub const CLUSTER_REACH: f32 = 0.3;
}

impl PatternGenerator for OrganicPattern {
    fn generate(&self, seed: &PatternSeed, style: PointStyle, rng: &mut dyn RngCore) -> Vec<Point> {
        if !seed.is_valid() {
            return Vec::new();
        }
        let (min_c, max_c) = Self::CLUSTERS;
        let (min_p, max_p) = Self::POINTS_PER_CLUSTER;
        let clusters = rand_inclusive(rng, min_c, max_c);
        let mut out = Vec::new();
        for _ in 0..clusters {
            let cluster_center = seed.center
                + polar(rand01(rng) * TAU) * (rand01(rng) * seed.radius * Self::CENTER_REACH);
            let count = rand_inclusive(rng, min_p, max_p);
            for _ in 0..count {
                let offset =
                    polar(rand01(rng) * TAU) * (rand01(rng) * seed.radius * Self::CLUSTER_REACH);
                let size = style.size * rand_range(rng, 0.7, 1.3);
                let opacity = style.opacity * rand_range(rng, 0.6, 1.0);
                out.push(Point::clamped(cluster_center + offset, size, opacity));
            }
        }
        out
    }
}
