use glam::Vec2;
use spawn_paint::prelude::*;
use spawn_paint_examples::{init_tracing, render_distribution_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut editor = DistributionEditor::try_new(
        EditorConfig::new().with_seed(77),
        2,
        CanvasMetrics::new(500.0, 500.0, 1.0),
    )?;
    editor.set_mode("circle");

    // Misclick: the second click lands 4 px away and is discarded.
    editor.pointer_down(Vec2::new(120.0, 120.0));
    editor.pointer_down(Vec2::new(124.0, 120.0));
    info!("after misclick: {} points", editor.point_count(0));

    // A real circle, with a preview sweep in between.
    editor.pointer_down(Vec2::new(250.0, 250.0));
    for r in (0..=150).step_by(10) {
        editor.pointer_move(Vec2::new(250.0 + r as f32, 250.0));
    }
    editor.pointer_down(Vec2::new(250.0, 400.0));
    info!("committed ring: {} points", editor.point_count(0));

    // Leave a pending center for species 1 to show the preview outline.
    editor.set_species(1);
    editor.pointer_down(Vec2::new(120.0, 380.0));
    editor.pointer_move(Vec2::new(170.0, 380.0));

    let rc = RenderConfig::new((500, 500))
        .with_species_colors(vec![[255, 170, 60], [90, 220, 140]])
        .with_background([10, 10, 16]);
    render_distribution_to_png(editor.store(), &rc, editor.circle_preview(), "circle-tool.png")?;

    Ok(())
}
