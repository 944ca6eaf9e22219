use glam::Vec2;
use spawn_paint::prelude::*;
use spawn_paint_examples::{init_tracing, render_distribution_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // One species per pattern so each gets its own color.
    let host = InMemoryHost::with_species_count(Pattern::ALL.len());
    let mut editor = DistributionEditor::try_new(
        EditorConfig::new().with_seed(2025).with_brush_size(12.0),
        host.species_count(),
        CanvasMetrics::new(900.0, 900.0, 1.0),
    )?;

    // 3x3 layout of seed centers.
    for (i, pattern) in Pattern::ALL.into_iter().enumerate() {
        let cell = Vec2::new((i % 3) as f32, (i / 3) as f32);
        let center = (cell + 0.5) / 3.0;
        editor.set_species(i);
        let n = editor.generate_pattern(pattern, center, 0.13);
        info!("{pattern:>9}: {n} points");
    }

    let colors = host.species.iter().map(|s| s.color.to_u8()).collect();
    let rc = RenderConfig::new((900, 900)).with_species_colors(colors);
    render_distribution_to_png(editor.store(), &rc, None, "patterns-gallery.png")?;

    Ok(())
}
