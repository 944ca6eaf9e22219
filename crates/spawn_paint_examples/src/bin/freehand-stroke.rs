use glam::Vec2;
use spawn_paint::prelude::*;
use spawn_paint_examples::{init_tracing, render_distribution_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut added = 0usize;
    let mut erased = 0usize;
    let counter = FnSink::new(move |event| match event {
        EditorEvent::PointAdded { .. } => {
            added += 1;
            info!("added so far: {added}");
        }
        EditorEvent::PointsErased { count, .. } => {
            erased += count;
            info!("erased so far: {erased}");
        }
        _ => {}
    });

    let mut editor = DistributionEditor::try_new(
        EditorConfig::new().with_seed(1).with_brush_size(24.0),
        1,
        CanvasMetrics::new(600.0, 600.0, 1.0),
    )?
    .with_sink(counter);

    // A sine stroke sampled far more densely than the declustering distance.
    editor.pointer_down(Vec2::new(40.0, 300.0));
    for i in 0..2000 {
        let x = 40.0 + i as f32 * 0.26;
        let y = 300.0 + (x / 60.0).sin() * 120.0;
        editor.pointer_move(Vec2::new(x, y));
    }
    editor.pointer_up();
    info!("stroke kept {} points", editor.point_count(0));

    // Erase across the middle of the stroke.
    editor.set_mode("erase");
    editor.pointer_down(Vec2::new(300.0, 100.0));
    for i in 0..400 {
        editor.pointer_move(Vec2::new(300.0, 100.0 + i as f32));
    }
    editor.pointer_leave();
    info!("after erasing {} points remain", editor.point_count(0));

    let rc = RenderConfig::new((600, 600)).with_species_colors(vec![[120, 200, 255]]);
    render_distribution_to_png(editor.store(), &rc, None, "freehand-stroke.png")?;

    Ok(())
}
