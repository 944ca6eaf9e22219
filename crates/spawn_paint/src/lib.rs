#![forbid(unsafe_code)]
//! spawn_paint: paint or procedurally generate per-species spawn distributions
//! for a particle simulation, and compile them into spawn specifications.
//!
//! Modules:
//! - geometry: pixel/normalized coordinate mapping
//! - store: per-species point storage with import/export
//! - freehand, circle, patterns: the editing tools and the nine procedural generators
//! - compiler, spawn, host: reduction to spawn specs and the host simulation contract
//! - editor: the editor that ties input, tools and notifications together
pub mod circle;
pub mod compiler;
pub mod config;
pub mod deferred;
pub mod editor;
pub mod error;
pub mod events;
pub mod freehand;
pub mod geometry;
pub mod host;
pub mod patterns;
pub mod point;
pub mod spawn;
pub mod store;

/// Convenient re-exports for common types. Import with `use spawn_paint::prelude::*;`.
pub mod prelude {
    pub use crate::circle::{CircleClick, CirclePhase, CircleTool};
    pub use crate::compiler::{compile_into_host, compile_points, CompileReport};
    pub use crate::config::EditorConfig;
    pub use crate::deferred::{DeferredSeed, SeedPoll};
    pub use crate::editor::{DistributionEditor, EditMode};
    pub use crate::error::{Error, Result};
    pub use crate::events::{ChangeSink, EditorEvent, FnSink, MultiSink, VecSink};
    pub use crate::freehand::{BrushGeometry, FreehandBrush, Stroke};
    pub use crate::geometry::CanvasMetrics;
    pub use crate::host::{InMemoryHost, ParticleHost, Rgb, SpeciesRecord};
    pub use crate::patterns::{
        add_fractal_branch, ClusterPattern, Density, FractalPattern, GeometricPattern,
        GridPattern, NoisePattern, OrganicPattern, Pattern, PatternGenerator, PatternSeed,
        PointStyle, RandomPattern, RingPattern, SpiralPattern,
    };
    pub use crate::point::Point;
    pub use crate::spawn::{SpawnKind, SpawnSpec};
    pub use crate::store::{DistributionExport, PointStore, SpeciesId};
}
