//! Square lattice cropped to a circle.
use glam::Vec2;
use rand::RngCore;

use crate::geometry::in_unit_square;
use crate::patterns::{Density, PatternGenerator, PatternSeed, PointStyle};
use crate::point::Point;

/// A `grid_size × grid_size` lattice spaced `2r / grid_size` apart and
/// centred on the seed. Cells farther than `r` from the center, or outside
/// the canvas, are dropped instead of clamped.
#[derive(Debug, Clone)]
pub struct GridPattern {
    pub grid_size: usize,
}

impl GridPattern {
    pub fn new(grid_size: usize) -> Self {
        Self { grid_size }
    }

    pub fn for_density(density: Density) -> Self {
        match density {
            Density::Compact => Self::new(4),
            Density::Full => Self::new(6),
        }
    }

    /// Lattice cell positions before cropping.
    pub fn lattice(&self, seed: &PatternSeed) -> impl Iterator<Item = Vec2> + '_ {
        let n = self.grid_size;
        let spacing = 2.0 * seed.radius / n.max(1) as f32;
        let mid = (n as f32 - 1.0) * 0.5;
        let center = seed.center;
        (0..n).flat_map(move |j| {
            (0..n).map(move |i| {
                center + Vec2::new(i as f32 - mid, j as f32 - mid) * spacing
            })
        })
    }
}

impl PatternGenerator for GridPattern {
    fn generate(
        &self,
        seed: &PatternSeed,
        style: PointStyle,
        _rng: &mut dyn RngCore,
    ) -> Vec<Point> {
        if !seed.is_valid() || self.grid_size == 0 {
            return Vec::new();
        }
        self.lattice(seed)
            .filter(|p| p.distance(seed.center) <= seed.radius && in_unit_square(*p))
            .map(|p| Point::new(p.x, p.y, style.size, style.opacity))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::patterns::test_support::style;
    use crate::patterns::Pattern;

    fn run(grid_size: usize, center: Vec2, radius: f32) -> Vec<Point> {
        let seed = PatternSeed::new(Pattern::Grid, center, radius);
        let mut rng = StdRng::seed_from_u64(0);
        GridPattern::new(grid_size).generate(&seed, style(), &mut rng)
    }

    #[test]
    fn five_by_five_at_center_drops_only_the_corners() {
        // Offsets are -2..=2 cells of 0.04; the four corner cells sit at
        // 0.113 from the center and fall outside the 0.1 radius.
        assert_eq!(run(5, Vec2::splat(0.5), 0.1).len(), 21);
    }

    #[test]
    fn five_by_five_in_the_corner_is_cropped_by_the_canvas() {
        // Only the non-negative quadrant survives: 3×3 cells minus (2, 2).
        let pts = run(5, Vec2::ZERO, 0.1);
        assert_eq!(pts.len(), 8);
        assert!(pts.iter().all(|p| p.x >= 0.0 && p.y >= 0.0));
    }

    #[test]
    fn count_matches_filtered_lattice() {
        let seed = PatternSeed::new(Pattern::Grid, Vec2::new(0.93, 0.4), 0.15);
        let grid = GridPattern::new(6);
        let expected = grid
            .lattice(&seed)
            .filter(|p| p.distance(seed.center) <= seed.radius && in_unit_square(*p))
            .count();
        assert_eq!(run(6, seed.center, seed.radius).len(), expected);
        assert!(expected < 36);
    }

    #[test]
    fn density_tiers() {
        assert_eq!(GridPattern::for_density(Density::Compact).grid_size, 4);
        assert_eq!(GridPattern::for_density(Density::Full).grid_size, 6);
    }
}
