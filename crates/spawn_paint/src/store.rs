//! Per-species point storage.
//!
//! [`PointStore`] owns the transient distribution being edited. Species ids are
//! validated against the species count last reported by the host simulation;
//! out-of-range ids are silently ignored.
use std::collections::BTreeMap;

use glam::Vec2;
use tracing::{debug, warn};

use crate::point::Point;

/// Serializable snapshot of a distribution, keyed by the stringified species id.
///
/// Species without points are omitted.
pub type DistributionExport = BTreeMap<String, Vec<Point>>;

pub type SpeciesId = usize;

/// Ordered point lists for each species.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointStore {
    species_count: usize,
    points: BTreeMap<SpeciesId, Vec<Point>>,
}

impl PointStore {
    pub fn new(species_count: usize) -> Self {
        Self {
            species_count,
            points: BTreeMap::new(),
        }
    }

    pub fn species_count(&self) -> usize {
        self.species_count
    }

    #[inline]
    pub fn is_valid_species(&self, species: SpeciesId) -> bool {
        species < self.species_count
    }

    /// Points of `species` in insertion order; empty for unknown species.
    pub fn points(&self, species: SpeciesId) -> &[Point] {
        self.points.get(&species).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self, species: SpeciesId) -> usize {
        self.points(species).len()
    }

    /// Total number of points across all species.
    pub fn total_len(&self) -> usize {
        self.points.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.points.values().all(Vec::is_empty)
    }

    /// Species ids that currently hold at least one point.
    pub fn populated_species(&self) -> impl Iterator<Item = SpeciesId> + '_ {
        self.points
            .iter()
            .filter(|(_, pts)| !pts.is_empty())
            .map(|(id, _)| *id)
    }

    /// Appends a point. Returns `false` (and stores nothing) for unknown species.
    pub fn add_point(&mut self, species: SpeciesId, point: Point) -> bool {
        if !self.is_valid_species(species) {
            debug!(
                "Ignoring point for species {} (species count {}).",
                species, self.species_count
            );
            return false;
        }
        self.points.entry(species).or_default().push(point);
        true
    }

    /// Appends many points at once. Returns the number stored.
    pub fn extend_points<I>(&mut self, species: SpeciesId, points: I) -> usize
    where
        I: IntoIterator<Item = Point>,
    {
        if !self.is_valid_species(species) {
            debug!(
                "Ignoring points for species {} (species count {}).",
                species, self.species_count
            );
            return 0;
        }
        let list = self.points.entry(species).or_default();
        let before = list.len();
        list.extend(points);
        list.len() - before
    }

    /// Mutable access to a species' list, creating it if needed.
    pub(crate) fn points_mut(&mut self, species: SpeciesId) -> Option<&mut Vec<Point>> {
        if !self.is_valid_species(species) {
            return None;
        }
        Some(self.points.entry(species).or_default())
    }

    /// Removes every point whose distance to `(x, y)` is below
    /// `radius + point.size * 0.5`. Returns the number of removed points.
    pub fn erase(&mut self, species: SpeciesId, x: f32, y: f32, radius: f32) -> usize {
        let Some(list) = self.points.get_mut(&species) else {
            return 0;
        };
        let cursor = Vec2::new(x, y);
        let mut removed = 0;
        // Reverse order keeps the indices of unvisited points stable while removing.
        for i in (0..list.len()).rev() {
            let p = list[i];
            if p.distance_to(cursor) < radius + p.size * 0.5 {
                list.remove(i);
                removed += 1;
            }
        }
        removed
    }

    /// Clears one species, or every species when `species` is `None`.
    pub fn clear(&mut self, species: Option<SpeciesId>) {
        match species {
            Some(id) => {
                if let Some(list) = self.points.get_mut(&id) {
                    list.clear();
                }
            }
            None => self.points.clear(),
        }
    }

    /// Copies the distribution into its plain export form.
    pub fn export(&self) -> DistributionExport {
        self.points
            .iter()
            .filter(|(_, pts)| !pts.is_empty())
            .map(|(id, pts)| (id.to_string(), pts.clone()))
            .collect()
    }

    /// Replaces the whole distribution with `data`.
    ///
    /// Entries whose key is not the canonical decimal form of an id in
    /// `0..species_count` are dropped, as are points off the canvas or with
    /// non-finite fields, a negative size or an opacity outside `[0, 1]`.
    /// Returns the number of species accepted.
    pub fn import(&mut self, data: &DistributionExport) -> usize {
        self.points.clear();
        let mut accepted = 0;
        for (key, pts) in data {
            let id = match key.parse::<SpeciesId>() {
                Ok(id) if id.to_string() == *key => id,
                _ => {
                    warn!("Dropping import entry with malformed species id '{}'.", key);
                    continue;
                }
            };
            if !self.is_valid_species(id) {
                warn!(
                    "Dropping import entry for species {} (species count {}).",
                    id, self.species_count
                );
                continue;
            }
            let valid: Vec<Point> = pts.iter().copied().filter(Point::is_well_formed).collect();
            if valid.len() != pts.len() {
                warn!(
                    "Dropped {} malformed points for species {}.",
                    pts.len() - valid.len(),
                    id
                );
            }
            self.points.entry(id).or_default().extend(valid);
            accepted += 1;
        }
        accepted
    }

    /// Adopts a new species count and drops every key `>= n`.
    /// Returns the number of species lists removed.
    pub fn sync_with_species_count(&mut self, n: usize) -> usize {
        self.species_count = n;
        let stale = self.points.split_off(&n);
        if !stale.is_empty() {
            debug!("Pruned {} stale species lists (species count {}).", stale.len(), n);
        }
        stale.len()
    }
}
