//! PNG preview of a distribution, standing in for the canvas render adapter.
use std::path::Path;

use anyhow::Context;
use image::{Rgb, RgbImage};
use spawn_paint::prelude::{CircleTool, PointStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber honoring `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub background: [u8; 3],
    /// Per-species colors; species beyond the list reuse it cyclically.
    pub species_colors: Vec<[u8; 3]>,
    /// Minimum dot radius in pixels.
    pub min_radius_px: i32,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32)) -> Self {
        Self {
            image_size,
            background: [20, 20, 24],
            species_colors: vec![[235, 235, 235]],
            min_radius_px: 1,
        }
    }

    pub fn with_background(mut self, rgb: [u8; 3]) -> Self {
        self.background = rgb;
        self
    }

    pub fn with_species_colors(mut self, colors: Vec<[u8; 3]>) -> Self {
        if !colors.is_empty() {
            self.species_colors = colors;
        }
        self
    }

    fn color(&self, species: usize) -> [u8; 3] {
        self.species_colors[species % self.species_colors.len()]
    }
}

/// Draws every point as an alpha-blended disc whose radius follows its size.
/// An optional circle preview (center and radius in image pixels) is outlined.
pub fn render_distribution_to_png(
    store: &PointStore,
    config: &RenderConfig,
    circle_preview: Option<(glam::Vec2, f32)>,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));
    let min_side = w.min(h) as f32;

    for species in store.populated_species() {
        let color = config.color(species);
        for p in store.points(species) {
            let cx = (p.x * w as f32).round() as i32;
            let cy = (p.y * h as f32).round() as i32;
            let r = ((p.size * 0.5 * min_side).round() as i32).max(config.min_radius_px);
            stamp_disc(&mut img, cx, cy, r, color, p.opacity);
        }
    }

    if let Some((center, radius)) = circle_preview {
        let steps = CircleTool::point_count(radius) * 8;
        for i in 0..steps {
            let a = i as f32 / steps as f32 * std::f32::consts::TAU;
            let x = (center.x + a.cos() * radius).round() as i32;
            let y = (center.y + a.sin() * radius).round() as i32;
            put(&mut img, x, y, [255, 255, 255], 0.6);
        }
    }

    let path = path.as_ref();
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}

fn stamp_disc(img: &mut RgbImage, cx: i32, cy: i32, r: i32, color: [u8; 3], alpha: f32) {
    let r2 = r * r;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r2 {
                put(img, cx + dx, cy + dy, color, alpha);
            }
        }
    }
}

fn put(img: &mut RgbImage, x: i32, y: i32, color: [u8; 3], alpha: f32) {
    if x < 0 || y < 0 || x >= img.width() as i32 || y >= img.height() as i32 {
        return;
    }
    let a = alpha.clamp(0.0, 1.0);
    let px = img.get_pixel_mut(x as u32, y as u32);
    for (dst, src) in px.0.iter_mut().zip(color) {
        *dst = (*dst as f32 * (1.0 - a) + src as f32 * a).round() as u8;
    }
}
