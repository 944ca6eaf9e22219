//! Conversion between canvas pixels and normalized `[0, 1]²` coordinates.
//!
//! Pointer input arrives in CSS pixels relative to the canvas origin. The
//! backing store is `css * device_pixel_ratio` pixels, but every length the
//! editor derives (brush reach, circle radius) is measured in CSS pixels, so
//! the device pixel ratio only matters to the render adapter.
use glam::Vec2;

/// Canvas layout used to map between pixel and normalized space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasMetrics {
    /// Canvas width in CSS pixels.
    pub width: f32,
    /// Canvas height in CSS pixels.
    pub height: f32,
    /// Backing-store pixels per CSS pixel.
    pub device_pixel_ratio: f32,
}

impl Default for CanvasMetrics {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 400.0,
            device_pixel_ratio: 1.0,
        }
    }
}

impl CanvasMetrics {
    /// Creates metrics for a canvas of the given CSS size. Non-finite or
    /// non-positive dimensions are replaced by one pixel so the mapping never
    /// divides by zero.
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        Self {
            width: sanitize_extent(width),
            height: sanitize_extent(height),
            device_pixel_ratio: sanitize_extent(device_pixel_ratio),
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Backing-store size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.device_pixel_ratio).round() as u32,
            (self.height * self.device_pixel_ratio).round() as u32,
        )
    }

    /// The shorter canvas side, the reference length for brush-derived sizes.
    #[inline]
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Maps a CSS pixel position to normalized space without clamping.
    #[inline]
    pub fn to_normalized(&self, px: Vec2) -> Vec2 {
        px / self.size()
    }

    /// Maps a CSS pixel position to normalized space, pulling out-of-bounds
    /// input onto the nearest canvas edge.
    #[inline]
    pub fn to_normalized_clamped(&self, px: Vec2) -> Vec2 {
        self.to_normalized(px).clamp(Vec2::ZERO, Vec2::ONE)
    }

    #[inline]
    pub fn to_pixels(&self, normalized: Vec2) -> Vec2 {
        normalized * self.size()
    }

    /// Converts a CSS pixel length into normalized units relative to the
    /// shorter canvas side.
    #[inline]
    pub fn length_to_normalized(&self, px: f32) -> f32 {
        px / self.min_side()
    }
}

/// True when `p` lies within the closed unit square.
#[inline]
pub fn in_unit_square(p: Vec2) -> bool {
    (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y)
}

fn sanitize_extent(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_between_pixels_and_normalized() {
        let m = CanvasMetrics::new(800.0, 400.0, 2.0);
        let n = m.to_normalized(Vec2::new(200.0, 100.0));
        assert_eq!(n, Vec2::new(0.25, 0.25));
        assert_eq!(m.to_pixels(n), Vec2::new(200.0, 100.0));
        assert_eq!(m.backing_size(), (1600, 800));
    }

    #[test]
    fn clamped_mapping_pulls_to_edges() {
        let m = CanvasMetrics::new(100.0, 100.0, 1.0);
        assert_eq!(
            m.to_normalized_clamped(Vec2::new(-20.0, 150.0)),
            Vec2::new(0.0, 1.0)
        );
        assert_eq!(m.to_normalized(Vec2::new(-20.0, 150.0)), Vec2::new(-0.2, 1.5));
    }

    #[test]
    fn lengths_use_the_shorter_side() {
        let m = CanvasMetrics::new(800.0, 400.0, 1.0);
        assert_eq!(m.min_side(), 400.0);
        assert_eq!(m.length_to_normalized(20.0), 0.05);
    }

    #[test]
    fn degenerate_dimensions_are_sanitized() {
        let m = CanvasMetrics::new(0.0, f32::NAN, -1.0);
        assert_eq!(m.width, 1.0);
        assert_eq!(m.height, 1.0);
        assert_eq!(m.device_pixel_ratio, 1.0);
    }

    #[test]
    fn unit_square_is_closed() {
        assert!(in_unit_square(Vec2::new(0.0, 1.0)));
        assert!(!in_unit_square(Vec2::new(1.0001, 0.5)));
        assert!(!in_unit_square(Vec2::new(0.5, -0.0001)));
    }
}
