//! Freehand painting and erasing.
//!
//! A press starts a stroke; while the stroke is active every pointer move
//! paints or erases again at the new position, which is how a drag lays down
//! a trail of points. Draw input outside `[0, 1]²` is ignored outright, and
//! new points closer than the declustering threshold to an existing point of
//! the same species are rejected so pointer oversampling does not pile up
//! duplicates.
use glam::Vec2;

use crate::geometry::{in_unit_square, CanvasMetrics};
use crate::point::Point;
use crate::store::{PointStore, SpeciesId};

/// Point size relative to the normalized brush size.
pub const POINT_SIZE_FACTOR: f32 = 0.3;
/// Minimum spacing between painted points relative to their size.
pub const DECLUSTER_FACTOR: f32 = 0.3;
/// Erase radius relative to the normalized brush size.
pub const ERASE_RADIUS_FACTOR: f32 = 0.5;

/// Normalized lengths derived from the brush size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushGeometry {
    /// Size given to painted points.
    pub point_size: f32,
    /// Base reach of the eraser, before adding each point's half size.
    pub erase_radius: f32,
}

impl BrushGeometry {
    pub fn new(brush_size_px: f32, metrics: &CanvasMetrics) -> Self {
        let brush = metrics.length_to_normalized(brush_size_px);
        Self {
            point_size: brush * POINT_SIZE_FACTOR,
            erase_radius: brush * ERASE_RADIUS_FACTOR,
        }
    }

    /// Distance below which a new point is treated as a duplicate.
    #[inline]
    pub fn decluster_distance(&self) -> f32 {
        self.point_size * DECLUSTER_FACTOR
    }
}

/// Outcome of one brush application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    /// A point was stored.
    Added,
    /// This many points were removed (possibly zero).
    Erased(usize),
    /// Input was out of bounds, too close to an existing point, or for an
    /// unknown species.
    Ignored,
}

/// Press/release state of a freehand stroke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FreehandBrush {
    drawing: bool,
}

impl FreehandBrush {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn press(&mut self) {
        self.drawing = true;
    }

    /// Ends the stroke. Returns whether a stroke was active.
    pub fn release(&mut self) -> bool {
        std::mem::replace(&mut self.drawing, false)
    }
}

/// Paints one point at `position` unless it is out of bounds or too close to
/// an existing point of `species`.
pub fn draw_point(
    store: &mut PointStore,
    species: SpeciesId,
    position: Vec2,
    brush: BrushGeometry,
    opacity: f32,
) -> Stroke {
    if !in_unit_square(position) {
        return Stroke::Ignored;
    }
    let min_distance = brush.decluster_distance();
    let crowded = store
        .points(species)
        .iter()
        .any(|p| p.distance_to(position) < min_distance);
    if crowded {
        return Stroke::Ignored;
    }
    let point = Point::new(position.x, position.y, brush.point_size, opacity);
    if store.add_point(species, point) {
        Stroke::Added
    } else {
        Stroke::Ignored
    }
}

/// Removes every point of `species` within the eraser's reach of `position`.
pub fn erase_points(
    store: &mut PointStore,
    species: SpeciesId,
    position: Vec2,
    brush: BrushGeometry,
) -> Stroke {
    Stroke::Erased(store.erase(species, position.x, position.y, brush.erase_radius))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brush() -> BrushGeometry {
        // 20 px brush on a 400 px canvas: 0.05 normalized.
        BrushGeometry::new(20.0, &CanvasMetrics::new(400.0, 400.0, 1.0))
    }

    #[test]
    fn geometry_follows_the_brush() {
        let b = brush();
        assert!((b.point_size - 0.015).abs() < 1e-7);
        assert!((b.erase_radius - 0.025).abs() < 1e-7);
        assert!((b.decluster_distance() - 0.0045).abs() < 1e-7);
    }

    #[test]
    fn out_of_bounds_input_is_ignored_not_clamped() {
        let mut store = PointStore::new(1);
        for p in [Vec2::new(-0.01, 0.5), Vec2::new(0.5, 1.01), Vec2::new(f32::NAN, 0.5)] {
            assert_eq!(draw_point(&mut store, 0, p, brush(), 1.0), Stroke::Ignored);
        }
        assert!(store.points(0).is_empty());
        assert_eq!(draw_point(&mut store, 0, Vec2::new(1.0, 0.0), brush(), 1.0), Stroke::Added);
    }

    #[test]
    fn declustering_keeps_only_the_first_of_two_close_points() {
        let mut store = PointStore::new(1);
        let first = Vec2::new(0.5, 0.5);
        let second = first + Vec2::new(0.004, 0.0);
        assert_eq!(draw_point(&mut store, 0, first, brush(), 0.7), Stroke::Added);
        assert_eq!(draw_point(&mut store, 0, second, brush(), 0.7), Stroke::Ignored);
        assert_eq!(store.points(0).len(), 1);
        assert_eq!(store.points(0)[0].position(), first);

        let far = first + Vec2::new(0.005, 0.0);
        assert_eq!(draw_point(&mut store, 0, far, brush(), 0.7), Stroke::Added);
    }

    #[test]
    fn declustering_is_per_species() {
        let mut store = PointStore::new(2);
        let p = Vec2::new(0.3, 0.3);
        assert_eq!(draw_point(&mut store, 0, p, brush(), 1.0), Stroke::Added);
        assert_eq!(draw_point(&mut store, 1, p, brush(), 1.0), Stroke::Added);
    }

    #[test]
    fn erase_reaches_brush_radius_plus_half_point_size() {
        let mut store = PointStore::new(1);
        draw_point(&mut store, 0, Vec2::new(0.5, 0.5), brush(), 1.0);
        // Reach is 0.025 + 0.0075.
        assert_eq!(
            erase_points(&mut store, 0, Vec2::new(0.535, 0.5), brush()),
            Stroke::Erased(0)
        );
        assert_eq!(
            erase_points(&mut store, 0, Vec2::new(0.53, 0.5), brush()),
            Stroke::Erased(1)
        );
    }

    #[test]
    fn release_reports_active_stroke() {
        let mut b = FreehandBrush::new();
        assert!(!b.release());
        b.press();
        assert!(b.is_drawing());
        assert!(b.release());
        assert!(!b.is_drawing());
    }
}
