//! Change notifications emitted by the editor.
//!
//! Every mutating editor operation sends one [`EditorEvent`] to the
//! [`ChangeSink`] injected at construction. Render adapters redraw on each
//! event and hosts use the same stream to track unsaved changes. Rejected
//! input changes nothing and sends nothing.
use crate::compiler::CompileReport;
use crate::patterns::Pattern;
use crate::point::Point;
use crate::store::SpeciesId;

/// Describes a change to the edited distribution.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// A freehand stroke stored a point.
    PointAdded {
        species: SpeciesId,
        point: Point,
    },

    /// A freehand eraser pass removed points.
    PointsErased {
        species: SpeciesId,
        count: usize,
    },

    /// A procedural pattern appended points.
    PatternGenerated {
        species: SpeciesId,
        pattern: Pattern,
        count: usize,
    },

    /// The circle tool committed a ring.
    CircleCommitted {
        species: SpeciesId,
        count: usize,
    },

    /// One species (`Some`) or every species (`None`) was cleared.
    Cleared {
        species: Option<SpeciesId>,
    },

    /// The distribution was replaced by an import.
    Imported {
        /// Number of species entries accepted.
        species: usize,
    },

    /// The distribution was rebuilt from the host's custom specs.
    LoadedFromHost {
        species: usize,
    },

    /// The species count changed and stale species were pruned.
    SpeciesSynced {
        species_count: usize,
        pruned: usize,
    },

    /// Demo data was seeded into an empty editor.
    Seeded {
        points: usize,
    },

    /// Spawn specs were compiled into the host.
    Compiled {
        report: CompileReport,
    },
}

/// Receives [`EditorEvent`]s.
pub trait ChangeSink {
    fn send(&mut self, event: EditorEvent);
}

/// A no-op sink.
impl ChangeSink for () {
    #[inline]
    fn send(&mut self, _event: EditorEvent) {}
}

/// Forwards events to a closure.
pub struct FnSink<F>
where
    F: FnMut(EditorEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(EditorEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> ChangeSink for FnSink<F>
where
    F: FnMut(EditorEvent),
{
    #[inline]
    fn send(&mut self, event: EditorEvent) {
        (self.f)(event);
    }
}

/// Collects every event in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<EditorEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<EditorEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[EditorEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl ChangeSink for VecSink {
    #[inline]
    fn send(&mut self, event: EditorEvent) {
        self.events.push(event);
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink {
    sinks: Vec<Box<dyn ChangeSink>>,
}

impl MultiSink {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn push(&mut self, sink: impl ChangeSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    pub fn with(mut self, sink: impl ChangeSink + 'static) -> Self {
        self.push(sink);
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl Default for MultiSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeSink for MultiSink {
    fn send(&mut self, event: EditorEvent) {
        let Some((last, rest)) = self.sinks.split_last_mut() else {
            return;
        };
        for sink in rest {
            sink.send(event.clone());
        }
        last.send(event);
    }
}
