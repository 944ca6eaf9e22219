//! Spawn points in normalized canvas space.
use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One spawn-location sample in normalized `[0, 1]²` space.
///
/// `size` and `opacity` are rendering and weighting hints, not physical units.
/// The compiler uses `opacity` as the centroid weight.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub opacity: f32,
}

impl Point {
    pub fn new(x: f32, y: f32, size: f32, opacity: f32) -> Self {
        Self {
            x,
            y,
            size,
            opacity,
        }
    }

    /// Create a point at `position`, clamping each axis into `[0, 1]` independently.
    pub fn clamped(position: Vec2, size: f32, opacity: f32) -> Self {
        let p = position.clamp(Vec2::ZERO, Vec2::ONE);
        Self::new(p.x, p.y, size, opacity)
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn distance_to(&self, other: Vec2) -> f32 {
        self.position().distance(other)
    }

    /// True when both coordinates lie in the closed unit square.
    #[inline]
    pub fn in_unit_square(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }

    /// True when the point is on the canvas with a non-negative size and an
    /// opacity in `[0, 1]`. NaN fails every check.
    pub(crate) fn is_well_formed(&self) -> bool {
        self.in_unit_square()
            && (0.0..f32::INFINITY).contains(&self.size)
            && (0.0..=1.0).contains(&self.opacity)
    }
}
