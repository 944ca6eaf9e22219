//! Contract with the host particle simulation.
//!
//! The host owns the canonical species list. The editor reads the species
//! count and each species' current [`SpawnSpec`], writes compiled specs back
//! and asks the host to reinitialize its particles.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::spawn::SpawnSpec;

/// Species display color, components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// 8-bit channels for rasterizing.
    pub fn to_u8(self) -> [u8; 3] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

/// One species as the host stores it.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SpeciesRecord {
    pub color: Rgb,
    pub start_position: SpawnSpec,
}

impl SpeciesRecord {
    pub fn new(color: Rgb, start_position: SpawnSpec) -> Self {
        Self {
            color,
            start_position,
        }
    }
}

/// The simulation the editor feeds.
pub trait ParticleHost {
    /// Number of species the simulation currently runs.
    fn species_count(&self) -> usize;

    /// The species records, or `None` when the host is not wired up.
    fn species(&self) -> Option<&[SpeciesRecord]>;

    fn species_mut(&mut self) -> Option<&mut [SpeciesRecord]>;

    /// Respawns all particles from the current start positions.
    fn initialize_particles_with_positions(&mut self);
}

/// A host backed by a plain vector, for tools and tests that run without a
/// live simulation.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHost {
    pub species: Vec<SpeciesRecord>,
    /// How many times particles were reinitialized.
    pub reinitializations: usize,
}

impl InMemoryHost {
    pub fn new(species: Vec<SpeciesRecord>) -> Self {
        Self {
            species,
            reinitializations: 0,
        }
    }

    /// `n` species with default cluster specs and evenly spread hues.
    pub fn with_species_count(n: usize) -> Self {
        let species = (0..n)
            .map(|i| {
                let color = hue_color(i as f32 / n.max(1) as f32);
                SpeciesRecord::new(color, SpawnSpec::default())
            })
            .collect();
        Self::new(species)
    }
}

impl ParticleHost for InMemoryHost {
    fn species_count(&self) -> usize {
        self.species.len()
    }

    fn species(&self) -> Option<&[SpeciesRecord]> {
        Some(&self.species)
    }

    fn species_mut(&mut self) -> Option<&mut [SpeciesRecord]> {
        Some(&mut self.species)
    }

    fn initialize_particles_with_positions(&mut self) {
        self.reinitializations += 1;
    }
}

/// Fully saturated color for a hue in `[0, 1)`.
fn hue_color(h: f32) -> Rgb {
    let h6 = (h.fract() * 6.0).max(0.0);
    let x = 1.0 - ((h6 % 2.0) - 1.0).abs();
    match h6 as u32 {
        0 => Rgb::new(1.0, x, 0.0),
        1 => Rgb::new(x, 1.0, 0.0),
        2 => Rgb::new(0.0, 1.0, x),
        3 => Rgb::new(0.0, x, 1.0),
        4 => Rgb::new(x, 0.0, 1.0),
        _ => Rgb::new(1.0, 0.0, x),
    }
}
