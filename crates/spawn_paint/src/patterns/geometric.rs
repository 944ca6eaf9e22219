//! Concentric regular polygons.
use std::f32::consts::TAU;

use glam::Vec2;
use rand::RngCore;

use crate::patterns::{polar, rand01, rand_inclusive, PatternGenerator, PatternSeed, PointStyle};
use crate::point::Point;

/// Regular shapes the geometric pattern draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Triangle,
    Square,
    Hexagon,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Triangle, Shape::Square, Shape::Hexagon];

    pub fn sides(self) -> usize {
        match self {
            Shape::Triangle => 3,
            Shape::Square => 4,
            Shape::Hexagon => 6,
        }
    }
}

/// A random regular shape traced in 2 or 3 concentric layers.
///
/// Layer `l` of `L` (1-based) has radius `r * (0.3 + l / L * 0.7)` and places
/// `l + 1` points on every edge, so outer layers are denser.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometricPattern;

impl GeometricPattern {
    /// Points of one polygon outline, starting at each vertex.
    pub fn outline(
        center: Vec2,
        radius: f32,
        sides: usize,
        rotation: f32,
        per_edge: usize,
    ) -> Vec<Vec2> {
        let vertex = |k: usize| center + polar(rotation + k as f32 / sides as f32 * TAU) * radius;
        let mut out = Vec::with_capacity(sides * per_edge);
        for k in 0..sides {
            let a = vertex(k);
            let b = vertex(k + 1);
            for step in 0..per_edge {
                out.push(a.lerp(b, step as f32 / per_edge as f32));
            }
        }
        out
    }
}

impl PatternGenerator for GeometricPattern {
    fn generate(&self, seed: &PatternSeed, style: PointStyle, rng: &mut dyn RngCore) -> Vec<Point> {
        if !seed.is_valid() {
            return Vec::new();
        }
        let shape = Shape::ALL[rand_inclusive(rng, 0, Shape::ALL.len() - 1)];
        let layers = rand_inclusive(rng, 2, 3);
        let rotation = rand01(rng) * TAU;

        let mut out = Vec::new();
        for layer in 1..=layers {
            let frac = layer as f32 / layers as f32;
            let layer_radius = seed.radius * (0.3 + frac * 0.7);
            let size = style.size * (0.6 + 0.4 * frac);
            for p in Self::outline(seed.center, layer_radius, shape.sides(), rotation, layer + 1) {
                out.push(Point::clamped(p, size, style.opacity));
            }
        }
        out
    }
}
