mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use spawn_paint::prelude::*;

const STROKE_LENGTHS: [usize; 3] = [64, 256, 1024];

/// A diagonal drag across the canvas, one pointer move per step.
fn editor_stroke_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("editor/stroke");
    for &steps in &STROKE_LENGTHS {
        group.throughput(common::points_throughput(steps));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter(|| {
                let mut ed = common::bench_editor();
                ed.pointer_down(Vec2::splat(8.0));
                for i in 0..steps {
                    let t = i as f32 / steps as f32;
                    ed.pointer_move(Vec2::splat(8.0 + t * (common::CANVAS_PX - 16.0)));
                }
                ed.pointer_up();
                black_box(ed.point_count(0));
            });
        });
    }
    group.finish();
}

fn compile_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("editor/compile");
    let mut ed = common::bench_editor();
    for _ in 0..20 {
        ed.generate_pattern(Pattern::Fractal, Vec2::splat(0.5), 0.3);
    }
    let points = ed.points(0).to_vec();
    group.throughput(common::points_throughput(points.len()));
    group.bench_function("custom_spec", |b| {
        b.iter(|| black_box(compile_points(black_box(&points))));
    });

    let mut host = InMemoryHost::with_species_count(2);
    group.bench_function("into_host", |b| {
        b.iter(|| black_box(ed.apply_to_host(&mut host).map(|r| r.custom).unwrap_or(0)));
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = editor_stroke_benches, compile_benches
}
criterion_main!(benches);
