//! Two-click circle tool: place a center, then commit a jittered ring.
//!
//! Phases cycle `Inactive -> SettingRadius -> Inactive`. The radius is
//! tracked in CSS pixels for the live preview and only converted to
//! normalized points on commit.
use std::f32::consts::TAU;

use glam::Vec2;
use rand::RngCore;

use crate::geometry::CanvasMetrics;
use crate::patterns::{polar, rand_range, PointStyle};
use crate::point::Point;

/// Default misclick threshold in CSS pixels.
pub const DEFAULT_MIN_RADIUS_PX: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CirclePhase {
    Inactive,
    SettingRadius {
        /// Center in CSS pixels.
        center: Vec2,
    },
}

/// Result of a click handed to the circle tool.
#[derive(Debug, Clone, PartialEq)]
pub enum CircleClick {
    /// First click: the center was captured.
    CenterPlaced,
    /// Second click closer than the threshold; nothing was committed.
    Discarded,
    /// Second click: these points should be added to the current species.
    Committed(Vec<Point>),
}

#[derive(Debug, Clone)]
pub struct CircleTool {
    phase: CirclePhase,
    radius_px: f32,
    min_radius_px: f32,
}

impl Default for CircleTool {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_RADIUS_PX)
    }
}

impl CircleTool {
    pub fn new(min_radius_px: f32) -> Self {
        Self {
            phase: CirclePhase::Inactive,
            radius_px: 0.0,
            min_radius_px,
        }
    }

    pub fn phase(&self) -> CirclePhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, CirclePhase::SettingRadius { .. })
    }

    /// Current preview radius in CSS pixels.
    pub fn radius_px(&self) -> f32 {
        self.radius_px
    }

    /// Center and radius (CSS pixels) to draw as a live preview.
    pub fn preview(&self) -> Option<(Vec2, f32)> {
        match self.phase {
            CirclePhase::SettingRadius { center } => Some((center, self.radius_px)),
            CirclePhase::Inactive => None,
        }
    }

    /// Number of points committed for a radius in CSS pixels.
    pub fn point_count(radius_px: f32) -> usize {
        ((radius_px.max(0.0) / 5.0).floor() as usize).saturating_add(8)
    }

    /// Updates the preview radius. Returns `true` while a center is placed.
    pub fn pointer_move(&mut self, position_px: Vec2) -> bool {
        match self.phase {
            CirclePhase::SettingRadius { center } => {
                self.radius_px = position_px.distance(center);
                true
            }
            CirclePhase::Inactive => false,
        }
    }

    /// Advances the state machine with a click at `position_px`.
    pub fn click(
        &mut self,
        position_px: Vec2,
        metrics: &CanvasMetrics,
        style: PointStyle,
        rng: &mut dyn RngCore,
    ) -> CircleClick {
        match self.phase {
            CirclePhase::Inactive => {
                self.phase = CirclePhase::SettingRadius {
                    center: position_px,
                };
                self.radius_px = 0.0;
                CircleClick::CenterPlaced
            }
            CirclePhase::SettingRadius { center } => {
                let radius = position_px.distance(center);
                self.reset();
                if !radius.is_finite() || radius < self.min_radius_px {
                    return CircleClick::Discarded;
                }
                // A ring larger than the canvas diagonal adds nothing visible.
                let radius = radius.min(metrics.size().length());
                CircleClick::Committed(ring_points(center, radius, metrics, style, rng))
            }
        }
    }

    /// Drops any placed center and returns to `Inactive`.
    pub fn reset(&mut self) {
        self.phase = CirclePhase::Inactive;
        self.radius_px = 0.0;
    }
}

fn ring_points(
    center: Vec2,
    radius: f32,
    metrics: &CanvasMetrics,
    style: PointStyle,
    rng: &mut dyn RngCore,
) -> Vec<Point> {
    let count = CircleTool::point_count(radius);
    (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * TAU;
            let r = radius * rand_range(rng, 0.8, 1.2);
            let px = center + polar(angle) * r;
            Point::clamped(metrics.to_normalized(px), style.size, style.opacity)
        })
        .collect()
}
