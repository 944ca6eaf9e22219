//! Editor configuration.
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::circle::DEFAULT_MIN_RADIUS_PX;
use crate::error::{Error, Result};
use crate::patterns::Density;

/// Smallest brush size in CSS pixels.
pub const MIN_BRUSH_SIZE: f32 = 5.0;
/// Largest brush size in compact mode.
pub const MAX_BRUSH_SIZE_COMPACT: f32 = 50.0;
/// Largest brush size in the full editor.
pub const MAX_BRUSH_SIZE: f32 = 80.0;
/// Opacity range accepted by the editor.
pub const OPACITY_RANGE: (f32, f32) = (0.1, 1.0);

/// Configuration for a [`crate::editor::DistributionEditor`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EditorConfig {
    /// Compact layout: smaller brush limit and lighter pattern counts.
    pub compact: bool,
    /// Initial brush size in CSS pixels.
    pub brush_size: f32,
    /// Initial point opacity.
    pub opacity: f32,
    /// RNG seed for pattern generation. `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Circle-tool radius below which a second click counts as a misclick.
    pub circle_min_radius_px: f32,
    /// Delay before [`crate::deferred::DeferredSeed`] fires.
    pub demo_seed_delay: Duration,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            compact: false,
            brush_size: 20.0,
            opacity: 0.8,
            seed: None,
            circle_min_radius_px: DEFAULT_MIN_RADIUS_PX,
            demo_seed_delay: Duration::from_millis(100),
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets compact mode.
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Sets the initial brush size in CSS pixels.
    pub fn with_brush_size(mut self, brush_size: f32) -> Self {
        self.brush_size = brush_size;
        self
    }

    /// Sets the initial opacity.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the circle-tool misclick threshold.
    pub fn with_circle_min_radius_px(mut self, px: f32) -> Self {
        self.circle_min_radius_px = px;
        self
    }

    /// Sets the demo seeding delay.
    pub fn with_demo_seed_delay(mut self, delay: Duration) -> Self {
        self.demo_seed_delay = delay;
        self
    }

    pub fn max_brush_size(&self) -> f32 {
        if self.compact {
            MAX_BRUSH_SIZE_COMPACT
        } else {
            MAX_BRUSH_SIZE
        }
    }

    pub fn density(&self) -> Density {
        if self.compact {
            Density::Compact
        } else {
            Density::Full
        }
    }

    /// Clamps a brush size into this configuration's range.
    pub fn clamp_brush_size(&self, px: f32) -> f32 {
        px.clamp(MIN_BRUSH_SIZE, self.max_brush_size())
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.brush_size.is_finite() || self.brush_size <= 0.0 {
            return Err(Error::InvalidConfig(
                "brush_size must be finite and > 0".into(),
            ));
        }
        if !self.opacity.is_finite() {
            return Err(Error::InvalidConfig("opacity must be finite".into()));
        }
        if !self.circle_min_radius_px.is_finite() || self.circle_min_radius_px < 0.0 {
            return Err(Error::InvalidConfig(
                "circle_min_radius_px must be finite and >= 0".into(),
            ));
        }
        Ok(())
    }
}

pub(crate) fn clamp_opacity(o: f32) -> f32 {
    o.clamp(OPACITY_RANGE.0, OPACITY_RANGE.1)
}

/// Seed derived from the system clock, for editors without a fixed seed.
pub(crate) fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5EED)
}
