//! Spawn specifications written onto host species records.
use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::point::Point;

/// Smallest spawn radius a spec may carry.
pub const MIN_SPAWN_RADIUS: f32 = 0.05;
/// Largest spawn radius a spec may carry.
pub const MAX_SPAWN_RADIUS: f32 = 0.4;

/// How the host places a species' particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SpawnKind {
    #[default]
    Cluster,
    Ring,
    Grid,
    Random,
    /// Explicit points painted or generated in the editor.
    Custom,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SpawnSpec {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: SpawnKind,
    pub center: Vec2,
    /// Always within `[MIN_SPAWN_RADIUS, MAX_SPAWN_RADIUS]` when built through
    /// the constructors.
    pub radius: f32,
    /// Only populated for [`SpawnKind::Custom`].
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub custom_points: Vec<Point>,
}

impl Default for SpawnSpec {
    fn default() -> Self {
        Self::default_cluster()
    }
}

impl SpawnSpec {
    /// The fallback used when a custom distribution is emptied.
    pub fn default_cluster() -> Self {
        Self::analytic(SpawnKind::Cluster, Vec2::splat(0.5), 0.1)
    }

    /// A pattern the host generates itself. `kind` should not be `Custom`.
    pub fn analytic(kind: SpawnKind, center: Vec2, radius: f32) -> Self {
        debug_assert!(kind != SpawnKind::Custom, "custom specs carry points");
        Self {
            kind,
            center,
            radius: clamp_spawn_radius(radius),
            custom_points: Vec::new(),
        }
    }

    pub fn custom(center: Vec2, radius: f32, points: Vec<Point>) -> Self {
        Self {
            kind: SpawnKind::Custom,
            center,
            radius: clamp_spawn_radius(radius),
            custom_points: points,
        }
    }

    #[inline]
    pub fn is_custom(&self) -> bool {
        self.kind == SpawnKind::Custom
    }
}

/// Clamps a spread into the spawn radius range. Non-finite input maps to
/// the minimum.
pub fn clamp_spawn_radius(radius: f32) -> f32 {
    if radius.is_finite() {
        radius.clamp(MIN_SPAWN_RADIUS, MAX_SPAWN_RADIUS)
    } else {
        MIN_SPAWN_RADIUS
    }
}
