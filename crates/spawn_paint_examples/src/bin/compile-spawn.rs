use glam::Vec2;
use spawn_paint::prelude::*;
use spawn_paint_examples::init_tracing;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut host = InMemoryHost::with_species_count(3);
    host.species[2].start_position = SpawnSpec::analytic(SpawnKind::Ring, Vec2::splat(0.5), 0.25);

    let mut editor = DistributionEditor::for_host(
        EditorConfig::new().with_seed(9),
        &host,
        CanvasMetrics::new(800.0, 600.0, 2.0),
    )?;

    editor.set_species(0);
    editor.generate_pattern(Pattern::Organic, Vec2::new(0.3, 0.4), 0.2);
    editor.set_species(1);
    editor.generate_pattern(Pattern::Spiral, Vec2::new(0.7, 0.6), 0.15);

    let report = editor.apply_to_host(&mut host)?;
    info!(
        "compiled: {} custom, {} reset, {} untouched; reinitialized {} time(s)",
        report.custom, report.reset, report.untouched, host.reinitializations
    );
    for (id, species) in host.species.iter().enumerate() {
        let spec = &species.start_position;
        info!(
            "species {id}: {:?} center=({:.3}, {:.3}) radius={:.3} points={}",
            spec.kind,
            spec.center.x,
            spec.center.y,
            spec.radius,
            spec.custom_points.len()
        );
    }

    // Emptying a custom species falls back to the default cluster on the next compile.
    editor.clear(Some(1));
    editor.apply_to_host(&mut host)?;
    info!("species 1 after clear: {:?}", host.species[1].start_position.kind);

    Ok(())
}
