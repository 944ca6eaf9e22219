#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use spawn_paint::prelude::*;

/// Canvas side in CSS pixels shared by the editor benches.
pub const CANVAS_PX: f32 = 1024.0;

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(30)
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(3))
}

/// Reported throughput in generated or processed points.
pub fn points_throughput(points: usize) -> Throughput {
    Throughput::Elements(points.max(1) as u64)
}

/// Deterministic RNG for one benchmark case, keyed by a parameter.
pub fn seeded_rng(key: u64) -> StdRng {
    StdRng::seed_from_u64(0x5EED_0000 ^ key)
}

/// The point style a 20 px brush produces on the bench canvas.
pub fn brush_style() -> PointStyle {
    PointStyle::new(20.0 / CANVAS_PX * 0.3, 0.8)
}

/// A seeded two-species editor on a square canvas.
pub fn bench_editor() -> DistributionEditor {
    DistributionEditor::new(
        EditorConfig::new().with_seed(7).with_brush_size(10.0),
        2,
        CanvasMetrics::new(CANVAS_PX, CANVAS_PX, 1.0),
    )
}
