//! Procedural pattern generators.
//!
//! Every generator takes a [`PatternSeed`] (center and radius in normalized
//! space), a base [`PointStyle`] and an RNG, and produces points that are
//! appended to a species' list. Generated coordinates are clamped into
//! `[0, 1]` per axis rather than rejected; the grid is the one exception and
//! drops lattice cells that fall outside the circle or the canvas.
use std::fmt;

use glam::Vec2;
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::point::Point;

pub mod cluster;
pub mod fractal;
pub mod geometric;
pub mod grid;
pub mod noise;
pub mod organic;
pub mod random;
pub mod ring;
pub mod spiral;

pub use cluster::ClusterPattern;
pub use fractal::{add_fractal_branch, FractalPattern};
pub use geometric::GeometricPattern;
pub use grid::GridPattern;
pub use noise::NoisePattern;
pub use organic::OrganicPattern;
pub use random::RandomPattern;
pub use ring::RingPattern;
pub use spiral::SpiralPattern;

/// The nine procedural patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Pattern {
    Cluster,
    Ring,
    Grid,
    Random,
    Organic,
    Geometric,
    Spiral,
    Fractal,
    Noise,
}

impl Pattern {
    pub const ALL: [Pattern; 9] = [
        Pattern::Cluster,
        Pattern::Ring,
        Pattern::Grid,
        Pattern::Random,
        Pattern::Organic,
        Pattern::Geometric,
        Pattern::Spiral,
        Pattern::Fractal,
        Pattern::Noise,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Cluster => "cluster",
            Pattern::Ring => "ring",
            Pattern::Grid => "grid",
            Pattern::Random => "random",
            Pattern::Organic => "organic",
            Pattern::Geometric => "geometric",
            Pattern::Spiral => "spiral",
            Pattern::Fractal => "fractal",
            Pattern::Noise => "noise",
        }
    }

    /// Looks up a pattern by its lowercase name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Builds the generator for this pattern at the given density.
    pub fn generator(self, density: Density) -> Box<dyn PatternGenerator> {
        match self {
            Pattern::Cluster => Box::new(ClusterPattern::for_density(density)),
            Pattern::Ring => Box::new(RingPattern::for_density(density)),
            Pattern::Grid => Box::new(GridPattern::for_density(density)),
            Pattern::Random => Box::new(RandomPattern::for_density(density)),
            Pattern::Organic => Box::new(OrganicPattern),
            Pattern::Geometric => Box::new(GeometricPattern),
            Pattern::Spiral => Box::new(SpiralPattern),
            Pattern::Fractal => Box::new(FractalPattern::default()),
            Pattern::Noise => Box::new(NoisePattern),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Point-count tier for the basic patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Density {
    /// Smaller counts used by the compact editor.
    Compact,
    #[default]
    Full,
}

/// Generator input: where and how large.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternSeed {
    pub center: Vec2,
    pub radius: f32,
    pub pattern: Pattern,
}

impl PatternSeed {
    pub fn new(pattern: Pattern, center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius,
            pattern,
        }
    }

    /// True when the seed can produce points at all.
    pub fn is_valid(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite() && self.radius > 0.0
    }

    /// Runs the seed's pattern and appends the result to `out`.
    pub fn append_to(
        &self,
        density: Density,
        style: PointStyle,
        rng: &mut dyn RngCore,
        out: &mut Vec<Point>,
    ) -> usize {
        self.pattern.generator(density).append(self, style, rng, out)
    }
}

/// Base size and opacity applied to generated points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointStyle {
    pub size: f32,
    pub opacity: f32,
}

impl PointStyle {
    pub fn new(size: f32, opacity: f32) -> Self {
        Self { size, opacity }
    }

    #[inline]
    pub(crate) fn point_at(&self, position: Vec2) -> Point {
        Point::clamped(position, self.size, self.opacity)
    }
}

/// Trait for procedural pattern generation.
pub trait PatternGenerator: Send + Sync {
    /// Produces the pattern's points for `seed`. Invalid seeds yield no points.
    fn generate(&self, seed: &PatternSeed, style: PointStyle, rng: &mut dyn RngCore) -> Vec<Point>;

    /// Appends the generated points to `out` without touching existing ones.
    /// Returns the number of points appended.
    fn append(
        &self,
        seed: &PatternSeed,
        style: PointStyle,
        rng: &mut dyn RngCore,
        out: &mut Vec<Point>,
    ) -> usize {
        let generated = self.generate(seed, style, rng);
        let n = generated.len();
        out.extend(generated);
        n
    }
}

/// Generate a random float in the range [0, 1].
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

/// Uniform float in `[lo, hi)`.
#[inline]
pub(crate) fn rand_range(rng: &mut dyn RngCore, lo: f32, hi: f32) -> f32 {
    lo + rand01(rng) * (hi - lo)
}

/// Uniform integer in `lo..=hi`.
#[inline]
pub(crate) fn rand_inclusive(rng: &mut dyn RngCore, lo: usize, hi: usize) -> usize {
    debug_assert!(lo <= hi);
    let span = (hi - lo + 1) as f32;
    (lo + (rand01(rng) * span) as usize).min(hi)
}

/// Unit vector for `angle` radians.
#[inline]
pub(crate) fn polar(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub struct FixedRng {
        pub value: u32,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value
        }

        fn next_u64(&mut self) -> u64 {
            self.value as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
        }
    }

    pub fn style() -> PointStyle {
        PointStyle::new(0.015, 0.8)
    }

    pub fn assert_in_unit_square(points: &[Point]) {
        for p in points {
            assert!(p.in_unit_square(), "point {p:?} escaped the canvas");
        }
    }
}
