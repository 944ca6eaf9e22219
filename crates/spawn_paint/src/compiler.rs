//! Reduces painted distributions to spawn specifications.
//!
//! A non-empty species compiles to a custom spec centred on the
//! opacity-weighted centroid of its points, with the mean (unweighted)
//! distance from that centroid as radius. An emptied species falls back to
//! the default cluster, but only if its current spec was custom; analytic
//! specs chosen elsewhere are left alone. The host is reinitialized once per
//! compile, after every species has been updated.
use glam::Vec2;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::host::{ParticleHost, SpeciesRecord};
use crate::point::Point;
use crate::spawn::SpawnSpec;
use crate::store::PointStore;

/// Opacity-weighted mean position. `None` for an empty list or when the
/// weights do not sum to a positive finite value.
pub fn weighted_centroid(points: &[Point]) -> Option<Vec2> {
    let (sum, weight) = points.iter().fold((Vec2::ZERO, 0.0_f32), |(sum, w), p| {
        (sum + p.position() * p.opacity, w + p.opacity)
    });
    if weight > 0.0 && weight.is_finite() {
        Some(sum / weight)
    } else {
        None
    }
}

/// Mean Euclidean distance of the points from `center`.
pub fn mean_distance(points: &[Point], center: Vec2) -> f32 {
    if points.is_empty() {
        return 0.0;
    }
    points.iter().map(|p| p.distance_to(center)).sum::<f32>() / points.len() as f32
}

/// Compiles one species' points. `None` when there is nothing to compile
/// (empty list or zero total weight).
pub fn compile_points(points: &[Point]) -> Option<SpawnSpec> {
    let center = weighted_centroid(points)?;
    let spread = mean_distance(points, center);
    Some(SpawnSpec::custom(center, spread, points.to_vec()))
}

/// What happened to each species during a compile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileReport {
    /// Species that received a fresh custom spec.
    pub custom: usize,
    /// Emptied custom species reset to the default cluster.
    pub reset: usize,
    /// Species whose spec was left as it was.
    pub untouched: usize,
}

/// Outcome of compiling a single species record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeciesUpdate {
    Custom,
    Reset,
    Untouched,
}

/// Applies the compile rules to one record.
pub fn compile_species(points: &[Point], record: &mut SpeciesRecord) -> SpeciesUpdate {
    if points.is_empty() {
        if record.start_position.is_custom() {
            record.start_position = SpawnSpec::default_cluster();
            return SpeciesUpdate::Reset;
        }
        return SpeciesUpdate::Untouched;
    }
    match compile_points(points) {
        Some(spec) => {
            record.start_position = spec;
            SpeciesUpdate::Custom
        }
        None => SpeciesUpdate::Untouched,
    }
}

/// Checks that the host exposes a species list that covers its reported count.
pub fn validate_host<H: ParticleHost + ?Sized>(host: &H) -> Result<usize> {
    let reported = host.species_count();
    let available = host.species().ok_or(Error::MissingSpecies)?.len();
    if available < reported {
        return Err(Error::SpeciesCountMismatch {
            reported,
            available,
        });
    }
    Ok(reported)
}

/// Compiles every species of `store` into `host` and reinitializes it once.
pub fn compile_into_host<H: ParticleHost + ?Sized>(
    store: &PointStore,
    host: &mut H,
) -> Result<CompileReport> {
    let count = validate_host(&*host)?;
    let records = host.species_mut().ok_or(Error::MissingSpecies)?;

    let mut report = CompileReport::default();
    for (id, record) in records.iter_mut().enumerate().take(count) {
        match compile_species(store.points(id), record) {
            SpeciesUpdate::Custom => report.custom += 1,
            SpeciesUpdate::Reset => report.reset += 1,
            SpeciesUpdate::Untouched => {
                if !store.points(id).is_empty() {
                    debug!("Species {} has zero total weight; keeping its spec.", id);
                }
                report.untouched += 1;
            }
        }
    }

    host.initialize_particles_with_positions();
    info!(
        "Compiled spawn specs: {} custom, {} reset, {} untouched.",
        report.custom, report.reset, report.untouched
    );
    Ok(report)
}
