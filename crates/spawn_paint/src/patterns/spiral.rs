//! Spiral arms winding out from the seed center.
use std::f32::consts::{PI, TAU};

use rand::RngCore;

use crate::patterns::{polar, rand01, rand_inclusive, PatternGenerator, PatternSeed, PointStyle};
use crate::point::Point;

/// Total winding of each arm in radians (three turns).
pub const SPIRAL_WINDING: f32 = 6.0 * PI;

/// One or two arms. Each arm walks `t` from 0 to 1 over 20 to 34 steps with
/// `angle = offset + t * 6π` and `r(t) = t * radius`; size and opacity fade
/// linearly toward the tip.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpiralPattern;

impl SpiralPattern {
    pub const ARMS: (usize, usize) = (1, 2);
    pub const STEPS: (usize, usize) = (20, 34);

    /// Size and opacity multiplier at parameter `t`.
    #[inline]
    pub fn fade(t: f32) -> f32 {
        1.0 - 0.5 * t
    }
}

impl PatternGenerator for SpiralPattern {
    fn generate(&self, seed: &PatternSeed, style: PointStyle, rng: &mut dyn RngCore) -> Vec<Point> {
        if !seed.is_valid() {
            return Vec::new();
        }
        let arms = rand_inclusive(rng, Self::ARMS.0, Self::ARMS.1);
        let base_offset = rand01(rng) * TAU;
        let mut out = Vec::new();
        for arm in 0..arms {
            let offset = base_offset + arm as f32 / arms as f32 * TAU;
            let steps = rand_inclusive(rng, Self::STEPS.0, Self::STEPS.1);
            for i in 0..steps {
                let t = i as f32 / (steps - 1) as f32;
                let angle = offset + t * SPIRAL_WINDING;
                let fade = Self::fade(t);
                out.push(Point::clamped(
                    seed.center + polar(angle) * (t * seed.radius),
                    style.size * fade,
                    style.opacity * fade,
                ));
            }
        }
        out
    }
}
