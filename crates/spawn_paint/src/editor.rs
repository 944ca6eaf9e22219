//! The distribution editor: per-species point editing driven by pointer
//! input, procedural generation and compilation into the host simulation.
//!
//! All mutation happens synchronously inside the method that receives the
//! input. After every change one [`EditorEvent`] goes to the injected
//! [`ChangeSink`]; rejected input changes nothing and emits nothing.
use std::f32::consts::TAU;
use std::fmt;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::circle::{CircleClick, CircleTool};
use crate::compiler::{compile_into_host, validate_host, CompileReport};
use crate::config::{clamp_opacity, clock_seed, EditorConfig};
use crate::error::Result;
use crate::events::{ChangeSink, EditorEvent};
use crate::freehand::{draw_point, erase_points, BrushGeometry, FreehandBrush, Stroke};
use crate::geometry::{in_unit_square, CanvasMetrics};
use crate::host::ParticleHost;
use crate::patterns::{polar, Pattern, PatternSeed, PointStyle};
use crate::point::Point;
use crate::store::{DistributionExport, PointStore, SpeciesId};

/// Pattern radius relative to the normalized brush size.
pub const PATTERN_RADIUS_FACTOR: f32 = 2.0;

/// Patterns cycled through when seeding demo data.
const DEMO_PATTERNS: [Pattern; 6] = [
    Pattern::Cluster,
    Pattern::Ring,
    Pattern::Organic,
    Pattern::Spiral,
    Pattern::Geometric,
    Pattern::Noise,
];

/// What pointer input does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Draw,
    Erase,
    /// Each press stamps the selected pattern.
    Pattern,
    /// Two clicks define a circle.
    Circle,
}

impl EditMode {
    pub const ALL: [EditMode; 4] = [
        EditMode::Draw,
        EditMode::Erase,
        EditMode::Pattern,
        EditMode::Circle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EditMode::Draw => "draw",
            EditMode::Erase => "erase",
            EditMode::Pattern => "pattern",
            EditMode::Circle => "circle",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct DistributionEditor {
    config: EditorConfig,
    metrics: CanvasMetrics,
    store: PointStore,
    current_species: SpeciesId,
    mode: EditMode,
    pattern: Pattern,
    brush_size: f32,
    opacity: f32,
    brush: FreehandBrush,
    circle: CircleTool,
    rng: StdRng,
    sink: Box<dyn ChangeSink>,
}

impl fmt::Debug for DistributionEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistributionEditor")
            .field("config", &self.config)
            .field("metrics", &self.metrics)
            .field("store", &self.store)
            .field("current_species", &self.current_species)
            .field("mode", &self.mode)
            .field("pattern", &self.pattern)
            .field("brush_size", &self.brush_size)
            .field("opacity", &self.opacity)
            .field("brush", &self.brush)
            .field("circle", &self.circle)
            .finish_non_exhaustive()
    }
}

impl DistributionEditor {
    /// Creates an editor after validating `config`.
    pub fn try_new(
        config: EditorConfig,
        species_count: usize,
        metrics: CanvasMetrics,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, species_count, metrics))
    }

    pub fn new(config: EditorConfig, species_count: usize, metrics: CanvasMetrics) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid editor configuration");
        Self::build(config, species_count, metrics)
    }

    /// Creates an editor sized to `host` and loaded with its custom specs.
    pub fn for_host<H: ParticleHost + ?Sized>(
        config: EditorConfig,
        host: &H,
        metrics: CanvasMetrics,
    ) -> Result<Self> {
        let count = validate_host(host)?;
        let mut editor = Self::try_new(config, count, metrics)?;
        editor.load_from_host(host)?;
        Ok(editor)
    }

    fn build(config: EditorConfig, species_count: usize, metrics: CanvasMetrics) -> Self {
        let seed = config.seed.unwrap_or_else(clock_seed);
        Self {
            brush_size: config.clamp_brush_size(config.brush_size),
            opacity: clamp_opacity(config.opacity),
            circle: CircleTool::new(config.circle_min_radius_px),
            store: PointStore::new(species_count),
            current_species: 0,
            mode: EditMode::default(),
            pattern: Pattern::Cluster,
            brush: FreehandBrush::new(),
            rng: StdRng::seed_from_u64(seed),
            sink: Box::new(()),
            metrics,
            config,
        }
    }

    /// Routes change notifications to `sink`.
    pub fn with_sink(mut self, sink: impl ChangeSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn metrics(&self) -> &CanvasMetrics {
        &self.metrics
    }

    pub fn store(&self) -> &PointStore {
        &self.store
    }

    pub fn species_count(&self) -> usize {
        self.store.species_count()
    }

    pub fn current_species(&self) -> SpeciesId {
        self.current_species
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn brush_size(&self) -> f32 {
        self.brush_size
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_drawing(&self) -> bool {
        self.brush.is_drawing()
    }

    pub fn points(&self, species: SpeciesId) -> &[Point] {
        self.store.points(species)
    }

    pub fn point_count(&self, species: SpeciesId) -> usize {
        self.store.len(species)
    }

    /// Circle center and radius (CSS pixels) while the circle tool waits for
    /// its second click.
    pub fn circle_preview(&self) -> Option<(Vec2, f32)> {
        self.circle.preview()
    }

    /// Brush-derived normalized lengths for the current canvas.
    pub fn brush_geometry(&self) -> BrushGeometry {
        BrushGeometry::new(self.brush_size, &self.metrics)
    }

    /// Style given to new points.
    pub fn point_style(&self) -> PointStyle {
        PointStyle::new(self.brush_geometry().point_size, self.opacity)
    }

    /// Selects the species edited by pointer input. Unknown ids are ignored.
    pub fn set_species(&mut self, species: SpeciesId) -> bool {
        if !self.store.is_valid_species(species) {
            debug!(
                "Ignoring species selection {} (species count {}).",
                species,
                self.store.species_count()
            );
            return false;
        }
        self.current_species = species;
        true
    }

    /// Sets the brush size, clamped to the configured range. Non-finite
    /// input is ignored. Returns the size in effect.
    pub fn set_brush_size(&mut self, px: f32) -> f32 {
        if px.is_finite() {
            self.brush_size = self.config.clamp_brush_size(px);
        }
        self.brush_size
    }

    /// Sets the opacity for new points, clamped to `[0.1, 1.0]`. Non-finite
    /// input is ignored. Returns the opacity in effect.
    pub fn set_opacity(&mut self, opacity: f32) -> f32 {
        if opacity.is_finite() {
            self.opacity = clamp_opacity(opacity);
        }
        self.opacity
    }

    /// Switches mode by name. Unknown names are ignored.
    pub fn set_mode(&mut self, name: &str) -> bool {
        match EditMode::from_name(name) {
            Some(mode) => {
                self.set_mode_kind(mode);
                true
            }
            None => {
                debug!("Ignoring unknown edit mode '{}'.", name);
                false
            }
        }
    }

    pub fn set_mode_kind(&mut self, mode: EditMode) {
        if self.mode == EditMode::Circle && mode != EditMode::Circle {
            self.circle.reset();
        }
        self.brush.release();
        self.mode = mode;
    }

    /// Selects the pattern by name. Unknown names are ignored.
    pub fn set_pattern(&mut self, name: &str) -> bool {
        match Pattern::from_name(name) {
            Some(pattern) => {
                self.pattern = pattern;
                true
            }
            None => {
                debug!("Ignoring unknown pattern '{}'.", name);
                false
            }
        }
    }

    pub fn set_pattern_kind(&mut self, pattern: Pattern) {
        self.pattern = pattern;
    }

    /// Re-derives the pixel mapping after a layout change.
    pub fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) {
        self.metrics = CanvasMetrics::new(width, height, device_pixel_ratio);
    }

    /// Clears one species, or all of them. Unknown species are ignored.
    pub fn clear(&mut self, species: Option<SpeciesId>) {
        if let Some(id) = species {
            if !self.store.is_valid_species(id) {
                return;
            }
        }
        self.store.clear(species);
        self.sink.send(EditorEvent::Cleared { species });
    }

    /// Pointer press in CSS pixels. Returns whether the distribution changed.
    pub fn pointer_down(&mut self, position: impl Into<mint::Point2<f32>>) -> bool {
        let px = to_vec2(position);
        match self.mode {
            EditMode::Draw | EditMode::Erase => {
                self.brush.press();
                self.stroke_at(px)
            }
            EditMode::Pattern => {
                let at = self.metrics.to_normalized(px);
                if !in_unit_square(at) {
                    return false;
                }
                let radius =
                    self.metrics.length_to_normalized(self.brush_size) * PATTERN_RADIUS_FACTOR;
                self.generate_pattern(self.pattern, at, radius) > 0
            }
            EditMode::Circle => self.circle_click(px),
        }
    }

    /// Pointer move in CSS pixels. Paints or erases while a stroke is active
    /// and updates the circle preview. Returns whether the distribution changed.
    pub fn pointer_move(&mut self, position: impl Into<mint::Point2<f32>>) -> bool {
        let px = to_vec2(position);
        match self.mode {
            EditMode::Draw | EditMode::Erase if self.brush.is_drawing() => self.stroke_at(px),
            EditMode::Circle => {
                self.circle.pointer_move(px);
                false
            }
            _ => false,
        }
    }

    pub fn pointer_up(&mut self) {
        self.brush.release();
    }

    pub fn pointer_leave(&mut self) {
        self.brush.release();
    }

    fn stroke_at(&mut self, px: Vec2) -> bool {
        let at = self.metrics.to_normalized(px);
        let brush = self.brush_geometry();
        let species = self.current_species;
        let stroke = match self.mode {
            EditMode::Erase => erase_points(&mut self.store, species, at, brush),
            _ => draw_point(&mut self.store, species, at, brush, self.opacity),
        };
        match stroke {
            Stroke::Added => {
                if let Some(&point) = self.store.points(species).last() {
                    self.sink.send(EditorEvent::PointAdded { species, point });
                }
                true
            }
            Stroke::Erased(count) if count > 0 => {
                self.sink.send(EditorEvent::PointsErased { species, count });
                true
            }
            Stroke::Erased(_) | Stroke::Ignored => false,
        }
    }

    fn circle_click(&mut self, px: Vec2) -> bool {
        let style = self.point_style();
        match self.circle.click(px, &self.metrics, style, &mut self.rng) {
            CircleClick::CenterPlaced => false,
            CircleClick::Discarded => {
                debug!("Circle radius below threshold; nothing committed.");
                false
            }
            CircleClick::Committed(points) => {
                let species = self.current_species;
                let count = self.store.extend_points(species, points);
                if count == 0 {
                    return false;
                }
                self.sink.send(EditorEvent::CircleCommitted { species, count });
                true
            }
        }
    }

    /// Appends `pattern` around `center` (normalized) to the current species.
    /// Returns the number of points added.
    pub fn generate_pattern(&mut self, pattern: Pattern, center: Vec2, radius: f32) -> usize {
        let species = self.current_species;
        let count = self.append_pattern(species, PatternSeed::new(pattern, center, radius));
        if count > 0 {
            self.sink.send(EditorEvent::PatternGenerated {
                species,
                pattern,
                count,
            });
        }
        count
    }

    fn append_pattern(&mut self, species: SpeciesId, seed: PatternSeed) -> usize {
        let style = self.point_style();
        let density = self.config.density();
        let Some(list) = self.store.points_mut(species) else {
            return 0;
        };
        seed.append_to(density, style, &mut self.rng, list)
    }

    /// Plain snapshot of the distribution.
    pub fn export(&self) -> DistributionExport {
        self.store.export()
    }

    /// Replaces the distribution. Returns the number of species accepted.
    pub fn import(&mut self, data: &DistributionExport) -> usize {
        let accepted = self.store.import(data);
        self.sink.send(EditorEvent::Imported { species: accepted });
        accepted
    }

    /// Adopts a new species count, pruning stale species and resetting an
    /// invalid selection to species 0.
    pub fn sync_with_species_count(&mut self, n: usize) {
        let pruned = self.store.sync_with_species_count(n);
        if !self.store.is_valid_species(self.current_species) {
            self.current_species = 0;
        }
        self.sink.send(EditorEvent::SpeciesSynced {
            species_count: n,
            pruned,
        });
    }

    /// Syncs the species count with the host.
    pub fn sync_with_host<H: ParticleHost + ?Sized>(&mut self, host: &H) -> Result<()> {
        let count = validate_host(host)?;
        self.sync_with_species_count(count);
        Ok(())
    }

    /// Rebuilds the distribution from the host's custom specs. Species with
    /// analytic specs start empty. Returns the number of species loaded.
    pub fn load_from_host<H: ParticleHost + ?Sized>(&mut self, host: &H) -> Result<usize> {
        let count = validate_host(host)?;
        let records = host.species().unwrap_or(&[]);
        self.store.sync_with_species_count(count);
        if !self.store.is_valid_species(self.current_species) {
            self.current_species = 0;
        }
        self.store.clear(None);

        let mut loaded = 0;
        for (id, record) in records.iter().enumerate().take(count) {
            let spec = &record.start_position;
            if !spec.is_custom() {
                continue;
            }
            let points = spec.custom_points.iter().copied();
            if self.store.extend_points(id, points.filter(Point::is_well_formed)) > 0 {
                loaded += 1;
            }
        }
        self.sink.send(EditorEvent::LoadedFromHost { species: loaded });
        Ok(loaded)
    }

    /// Compiles every species into the host and reinitializes its particles.
    pub fn apply_to_host<H: ParticleHost + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> Result<CompileReport> {
        let report = compile_into_host(&self.store, host)?;
        self.sink.send(EditorEvent::Compiled { report });
        Ok(report)
    }

    /// Places one demo pattern per species around the canvas center. Does
    /// nothing if any points exist. Returns the number of points placed.
    pub fn seed_demo(&mut self) -> usize {
        if !self.store.is_empty() {
            return 0;
        }
        let n = self.store.species_count();
        let mut total = 0;
        for id in 0..n {
            let center = if n == 1 {
                Vec2::splat(0.5)
            } else {
                Vec2::splat(0.5) + polar(id as f32 / n as f32 * TAU) * 0.25
            };
            let pattern = DEMO_PATTERNS[id % DEMO_PATTERNS.len()];
            total += self.append_pattern(id, PatternSeed::new(pattern, center, 0.12));
        }
        if total > 0 {
            info!("Seeded {} demo points across {} species.", total, n);
            self.sink.send(EditorEvent::Seeded { points: total });
        }
        total
    }
}

#[inline]
fn to_vec2(position: impl Into<mint::Point2<f32>>) -> Vec2 {
    let p: mint::Point2<f32> = position.into();
    Vec2::new(p.x, p.y)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::events::FnSink;
    use crate::host::InMemoryHost;
    use crate::spawn::{SpawnKind, SpawnSpec, MIN_SPAWN_RADIUS};

    fn editor(species: usize) -> DistributionEditor {
        DistributionEditor::new(
            EditorConfig::new().with_seed(42).with_brush_size(20.0).with_opacity(1.0),
            species,
            CanvasMetrics::new(400.0, 400.0, 1.0),
        )
    }

    fn recorded(species: usize) -> (DistributionEditor, Rc<RefCell<Vec<EditorEvent>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink_log = log.clone();
        let editor = editor(species).with_sink(FnSink::new(move |e| sink_log.borrow_mut().push(e)));
        (editor, log)
    }

    #[test]
    fn try_new_rejects_invalid_config() {
        let result = DistributionEditor::try_new(
            EditorConfig::new().with_brush_size(-3.0),
            2,
            CanvasMetrics::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn setters_clamp_and_validate() {
        let mut ed = editor(3);
        assert!(!ed.set_species(3));
        assert!(ed.set_species(2));
        assert_eq!(ed.current_species(), 2);

        assert_eq!(ed.set_brush_size(200.0), 80.0);
        assert_eq!(ed.set_brush_size(1.0), 5.0);
        assert_eq!(ed.set_brush_size(f32::NAN), 5.0);
        assert_eq!(ed.set_opacity(0.0), 0.1);
        assert_eq!(ed.set_opacity(3.0), 1.0);

        assert!(!ed.set_mode("lasso"));
        assert_eq!(ed.mode(), EditMode::Draw);
        assert!(ed.set_mode("erase"));
        assert_eq!(ed.mode(), EditMode::Erase);
        assert!(!ed.set_pattern("voronoi"));
        assert!(ed.set_pattern("spiral"));
        assert_eq!(ed.pattern(), Pattern::Spiral);
    }

    #[test]
    fn compact_editor_caps_brush_at_fifty() {
        let mut ed = DistributionEditor::new(
            EditorConfig::new().with_compact(true).with_seed(1),
            1,
            CanvasMetrics::default(),
        );
        assert_eq!(ed.set_brush_size(70.0), 50.0);
    }

    #[test]
    fn drag_paints_a_stroke_until_release() {
        let (mut ed, log) = recorded(1);
        assert!(ed.pointer_down(Vec2::new(100.0, 100.0)));
        assert!(ed.is_drawing());
        for step in 1..=5 {
            ed.pointer_move(Vec2::new(100.0 + step as f32 * 10.0, 100.0));
        }
        ed.pointer_up();
        assert!(!ed.pointer_move(Vec2::new(300.0, 300.0)));
        assert_eq!(ed.point_count(0), 6);
        assert_eq!(log.borrow().len(), 6);
        assert!(matches!(log.borrow()[0], EditorEvent::PointAdded { species: 0, .. }));
    }

    #[test]
    fn hover_without_press_does_nothing() {
        let (mut ed, log) = recorded(1);
        assert!(!ed.pointer_move(Vec2::new(100.0, 100.0)));
        assert!(ed.points(0).is_empty());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn oversampled_drag_is_declustered() {
        let mut ed = editor(1);
        ed.pointer_down(Vec2::new(100.0, 100.0));
        // 0.5 px steps are far below the 1.8 px declustering distance.
        for step in 1..=3 {
            ed.pointer_move(Vec2::new(100.0 + step as f32 * 0.5, 100.0));
        }
        ed.pointer_leave();
        assert_eq!(ed.point_count(0), 1);
        assert!(!ed.is_drawing());
    }

    #[test]
    fn drawing_outside_the_canvas_is_ignored() {
        let mut ed = editor(1);
        assert!(!ed.pointer_down(Vec2::new(-5.0, 100.0)));
        assert!(!ed.pointer_move(Vec2::new(100.0, 401.0)));
        assert!(ed.points(0).is_empty());
    }

    #[test]
    fn erase_mode_removes_points_under_the_cursor() {
        let (mut ed, log) = recorded(2);
        ed.pointer_down(Vec2::new(100.0, 100.0));
        ed.pointer_up();
        ed.set_species(1);
        ed.pointer_down(Vec2::new(100.0, 100.0));
        ed.pointer_up();

        ed.set_mode("erase");
        assert!(!ed.pointer_down(Vec2::new(300.0, 300.0)));
        assert!(ed.pointer_move(Vec2::new(102.0, 100.0)));
        ed.pointer_up();
        assert_eq!(ed.point_count(1), 0);
        assert_eq!(ed.point_count(0), 1, "other species untouched");
        assert_eq!(
            log.borrow().last(),
            Some(&EditorEvent::PointsErased {
                species: 1,
                count: 1
            })
        );
    }

    #[test]
    fn pattern_mode_stamps_once_per_press() {
        let (mut ed, log) = recorded(2);
        ed.set_species(1);
        ed.set_mode("pattern");
        ed.set_pattern("ring");
        assert!(ed.pointer_down(Vec2::new(200.0, 200.0)));
        assert!(!ed.pointer_move(Vec2::new(220.0, 200.0)));
        ed.pointer_up();
        assert_eq!(ed.point_count(1), 20);
        assert_eq!(ed.point_count(0), 0);
        // Ring radius is 0.7 of twice the 0.05 brush.
        for p in ed.points(1) {
            assert!((p.distance_to(Vec2::splat(0.5)) - 0.07).abs() < 1e-5);
        }
        assert_eq!(
            log.borrow().as_slice(),
            &[EditorEvent::PatternGenerated {
                species: 1,
                pattern: Pattern::Ring,
                count: 20
            }]
        );
    }

    #[test]
    fn generators_never_touch_other_species() {
        let mut ed = editor(3);
        ed.set_species(0);
        ed.generate_pattern(Pattern::Cluster, Vec2::splat(0.3), 0.1);
        let before = ed.points(0).to_vec();
        ed.set_species(2);
        for pattern in Pattern::ALL {
            assert!(ed.generate_pattern(pattern, Vec2::new(0.95, 0.05), 0.2) > 0);
        }
        assert_eq!(ed.points(0), before.as_slice());
        assert!(ed.points(1).is_empty());
        assert!(ed.points(2).iter().all(Point::in_unit_square));
    }

    #[test]
    fn circle_tool_commits_and_discards() {
        let (mut ed, log) = recorded(1);
        ed.set_mode("circle");

        assert!(!ed.pointer_down(Vec2::new(200.0, 200.0)));
        ed.pointer_move(Vec2::new(205.0, 200.0));
        assert_eq!(ed.circle_preview(), Some((Vec2::new(200.0, 200.0), 5.0)));
        assert!(!ed.pointer_down(Vec2::new(206.0, 200.0)));
        assert_eq!(ed.circle_preview(), None);
        assert!(ed.points(0).is_empty());
        assert!(log.borrow().is_empty());

        ed.pointer_down(Vec2::new(200.0, 200.0));
        assert!(ed.pointer_down(Vec2::new(250.0, 200.0)));
        assert_eq!(ed.point_count(0), 18);
        assert_eq!(
            log.borrow().as_slice(),
            &[EditorEvent::CircleCommitted {
                species: 0,
                count: 18
            }]
        );
    }

    #[test]
    fn leaving_circle_mode_discards_the_center() {
        let mut ed = editor(1);
        ed.set_mode("circle");
        ed.pointer_down(Vec2::new(200.0, 200.0));
        assert!(ed.circle_preview().is_some());
        ed.set_mode("draw");
        assert!(ed.circle_preview().is_none());
        ed.set_mode("circle");
        // The next click places a new center instead of committing.
        assert!(!ed.pointer_down(Vec2::new(300.0, 300.0)));
        assert!(ed.points(0).is_empty());
    }

    #[test]
    fn clear_ignores_unknown_species() {
        let (mut ed, log) = recorded(2);
        ed.generate_pattern(Pattern::Grid, Vec2::splat(0.5), 0.1);
        ed.clear(Some(7));
        assert_eq!(log.borrow().len(), 1);
        ed.clear(Some(0));
        assert!(ed.points(0).is_empty());
        assert_eq!(
            log.borrow().last(),
            Some(&EditorEvent::Cleared { species: Some(0) })
        );
    }

    #[test]
    fn sync_resets_invalid_selection() {
        let mut ed = editor(4);
        ed.set_species(3);
        ed.generate_pattern(Pattern::Ring, Vec2::splat(0.5), 0.1);
        ed.set_species(1);
        ed.generate_pattern(Pattern::Ring, Vec2::splat(0.5), 0.1);
        ed.set_species(3);

        ed.sync_with_species_count(2);
        assert_eq!(ed.current_species(), 0);
        assert_eq!(ed.point_count(1), 20);
        assert_eq!(ed.point_count(3), 0);
        assert_eq!(ed.export().len(), 1);
    }

    #[test]
    fn export_import_round_trip_between_editors() {
        let mut a = editor(3);
        a.set_species(2);
        a.generate_pattern(Pattern::Organic, Vec2::splat(0.4), 0.2);
        a.set_species(0);
        a.generate_pattern(Pattern::Spiral, Vec2::splat(0.6), 0.2);

        let mut b = editor(3);
        assert_eq!(b.import(&a.export()), 2);
        assert_eq!(b.export(), a.export());
    }

    #[test]
    fn resize_changes_brush_geometry() {
        let mut ed = editor(1);
        let before = ed.brush_geometry();
        ed.resize(800.0, 800.0, 2.0);
        let after = ed.brush_geometry();
        assert!((after.point_size - before.point_size * 0.5).abs() < 1e-7);
        assert_eq!(ed.metrics().backing_size(), (1600, 1600));
    }

    #[test]
    fn apply_to_host_compiles_and_notifies() {
        let (mut ed, log) = recorded(2);
        let mut host = InMemoryHost::with_species_count(2);
        ed.pointer_down(Vec2::new(200.0, 200.0));
        ed.pointer_up();

        let report = ed.apply_to_host(&mut host).expect("host is wired");
        assert_eq!(report.custom, 1);
        assert_eq!(host.reinitializations, 1);
        let spec = &host.species[0].start_position;
        assert_eq!(spec.kind, SpawnKind::Custom);
        assert_eq!(spec.center, Vec2::splat(0.5));
        assert_eq!(spec.radius, MIN_SPAWN_RADIUS);
        assert!(matches!(
            log.borrow().last(),
            Some(EditorEvent::Compiled { .. })
        ));
    }

    #[test]
    fn load_from_host_reads_custom_specs_only() {
        let mut host = InMemoryHost::with_species_count(3);
        let painted = vec![Point::new(0.2, 0.3, 0.01, 1.0), Point::new(0.25, 0.3, 0.01, 1.0)];
        host.species[1].start_position =
            SpawnSpec::custom(Vec2::new(0.225, 0.3), 0.05, painted.clone());
        host.species[2].start_position =
            SpawnSpec::analytic(SpawnKind::Ring, Vec2::splat(0.5), 0.2);

        let ed = DistributionEditor::for_host(
            EditorConfig::new().with_seed(3),
            &host,
            CanvasMetrics::default(),
        )
        .expect("host is wired");
        assert_eq!(ed.species_count(), 3);
        assert_eq!(ed.points(1), painted.as_slice());
        assert!(ed.points(0).is_empty());
        assert!(ed.points(2).is_empty());
    }

    #[test]
    fn seed_demo_fills_only_an_empty_editor() {
        let (mut ed, log) = recorded(4);
        let placed = ed.seed_demo();
        assert!(placed > 0);
        assert_eq!(ed.store().total_len(), placed);
        assert!((0..4).all(|id| ed.point_count(id) > 0));
        assert_eq!(log.borrow().as_slice(), &[EditorEvent::Seeded { points: placed }]);

        assert_eq!(ed.seed_demo(), 0);
        assert_eq!(log.borrow().len(), 1);
    }
}
