//! Recursive binary branching.
use std::f32::consts::{PI, TAU};

use glam::Vec2;
use rand::RngCore;

use crate::patterns::{
    polar, rand01, rand_inclusive, rand_range, PatternGenerator, PatternSeed, PointStyle,
};
use crate::point::Point;

/// Branches shorter than this stop the recursion.
pub const MIN_BRANCH_LENGTH: f32 = 0.01;
/// Child branch length relative to its parent.
pub const BRANCH_DECAY: f32 = 0.7;
/// Points emitted along every branch.
pub const POINTS_PER_BRANCH: usize = 5;
/// Default recursion depth.
pub const FRACTAL_DEPTH: u32 = 4;

/// Builds the points of one branch and all of its descendants.
///
/// The branch starts at `origin`, runs `length` along `angle` and emits
/// [`POINTS_PER_BRANCH`] evenly spaced points ending at its tip. It then
/// forks into two children of `length * 0.7`, turned left and right by an
/// independent random spread in `[π/6, π/4]`, with one less level of depth.
/// `depth == 0` or `length < 0.01` yields no points. Size and opacity shrink
/// with the remaining depth relative to `max_depth`.
pub fn add_fractal_branch(
    origin: Vec2,
    angle: f32,
    length: f32,
    depth: u32,
    max_depth: u32,
    style: PointStyle,
    rng: &mut dyn RngCore,
) -> Vec<Point> {
    if depth == 0 || length.is_nan() || length < MIN_BRANCH_LENGTH {
        return Vec::new();
    }

    let strength = depth as f32 / max_depth.max(depth) as f32;
    let size = style.size * (0.4 + 0.6 * strength);
    let opacity = style.opacity * (0.4 + 0.6 * strength);
    let dir = polar(angle);

    let mut out: Vec<Point> = (1..=POINTS_PER_BRANCH)
        .map(|i| {
            let t = i as f32 / POINTS_PER_BRANCH as f32;
            Point::clamped(origin + dir * (length * t), size, opacity)
        })
        .collect();

    let tip = origin + dir * length;
    let child_length = length * BRANCH_DECAY;
    let left = angle + rand_range(rng, PI / 6.0, PI / 4.0);
    let right = angle - rand_range(rng, PI / 6.0, PI / 4.0);
    out.extend(add_fractal_branch(tip, left, child_length, depth - 1, max_depth, style, rng));
    out.extend(add_fractal_branch(tip, right, child_length, depth - 1, max_depth, style, rng));
    out
}

/// 3 to 5 trunks of length `0.5 * radius` at evenly spaced angles, each
/// branching to `depth` levels.
#[derive(Debug, Clone)]
pub struct FractalPattern {
    pub depth: u32,
}

impl Default for FractalPattern {
    fn default() -> Self {
        Self {
            depth: FRACTAL_DEPTH,
        }
    }
}

impl FractalPattern {
    pub const TRUNKS: (usize, usize) = (3, 5);
    pub const TRUNK_FACTOR: f32 = 0.5;
}

impl PatternGenerator for FractalPattern {
    fn generate(&self, seed: &PatternSeed, style: PointStyle, rng: &mut dyn RngCore) -> Vec<Point> {
        if !seed.is_valid() {
            return Vec::new();
        }
        let trunks = rand_inclusive(rng, Self::TRUNKS.0, Self::TRUNKS.1);
        let base = rand01(rng) * TAU;
        let length = seed.radius * Self::TRUNK_FACTOR;
        let mut out = Vec::new();
        for k in 0..trunks {
            let angle = base + k as f32 / trunks as f32 * TAU;
            out.extend(add_fractal_branch(
                seed.center,
                angle,
                length,
                self.depth,
                self.depth,
                style,
                rng,
            ));
        }
        out
    }
}
