//! Render dispatch: one surface, one renderer per call.

use std::path::Path;

use log::{debug, warn};
use thiserror::Error;
use tiny_skia::Pixmap;
use uiforge_spec::{ElementConfig, ElementKind};

use crate::canvas::Canvas;
use crate::elements::ElementRenderer;
use crate::png::{write_pixmap, write_pixmap_to_vec_with_hash, PngConfig, PngError};
use crate::rng::DeterministicRng;

/// Largest surface edge, in device pixels, the dispatcher will allocate.
pub const MAX_SURFACE_DIM: u32 = 16_384;

/// Errors that can occur while producing a rendered element.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The surface could not be allocated; nothing was drawn this cycle.
    #[error("drawing surface unavailable ({width}x{height} px)")]
    SurfaceUnavailable { width: u32, height: u32 },

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    Png(#[from] PngError),
}

/// Per-call render settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Base seed for pixel noise.
    pub seed: u32,
}

impl RenderOptions {
    pub fn with_seed(seed: u32) -> Self {
        Self { seed }
    }
}

/// Raster output of one render pass.
#[derive(Debug, Clone)]
pub struct RenderedElement {
    pixmap: Pixmap,
    kind: ElementKind,
    padding: f32,
    scale: f32,
}

impl RenderedElement {
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Device width in pixels.
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Device height in pixels.
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Logical padding around the element.
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Effective output scale.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Straight-alpha RGBA of a device pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    /// Straight-alpha RGBA at logical element coordinates, where `(0, 0)`
    /// is the element's top-left corner inside the padding.
    pub fn element_pixel(&self, x: f32, y: f32) -> Option<[u8; 4]> {
        let dx = ((x + self.padding) * self.scale).floor();
        let dy = ((y + self.padding) * self.scale).floor();
        if dx < 0.0 || dy < 0.0 {
            return None;
        }
        self.pixel(dx as u32, dy as u32)
    }

    /// Encode as PNG, returning the bytes and their BLAKE3 hash.
    pub fn encode_png(&self, config: &PngConfig) -> Result<(Vec<u8>, String), RenderError> {
        Ok(write_pixmap_to_vec_with_hash(&self.pixmap, config)?)
    }

    /// Write a PNG file.
    pub fn write_png(&self, path: &Path, config: &PngConfig) -> Result<(), RenderError> {
        Ok(write_pixmap(&self.pixmap, path, config)?)
    }
}

/// Owns the drawing surface across render calls.
#[derive(Debug, Default)]
pub struct RenderDispatcher {
    frame: Option<RenderedElement>,
}

impl RenderDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sizes and clears the surface for `config`, then runs its renderer.
    ///
    /// The surface is reused when the device size is unchanged. When it
    /// cannot be allocated the cycle is skipped and no frame is kept.
    pub fn render(
        &mut self,
        config: &ElementConfig,
        options: &RenderOptions,
    ) -> Result<&RenderedElement, RenderError> {
        let previous = self.frame.take().map(RenderedElement::into_pixmap);
        let frame = draw(config, options, previous)?;
        Ok(self.frame.insert(frame))
    }

    /// Output of the last successful render.
    pub fn last_frame(&self) -> Option<&RenderedElement> {
        self.frame.as_ref()
    }

    pub fn into_frame(self) -> Option<RenderedElement> {
        self.frame
    }
}

/// Renders `config` onto a fresh surface.
pub fn render_element(
    config: &ElementConfig,
    options: &RenderOptions,
) -> Result<RenderedElement, RenderError> {
    draw(config, options, None)
}

fn draw(
    config: &ElementConfig,
    options: &RenderOptions,
    surface: Option<Pixmap>,
) -> Result<RenderedElement, RenderError> {
    let kind = config.kind();
    let renderer = renderer_for(config);
    let padding = renderer.padding();
    let scale = effective_scale(config.scale());
    let (width, height) = surface_size(config.width(), config.height(), padding, scale);

    let pixmap = match surface {
        Some(pixmap) if pixmap.width() == width && pixmap.height() == height => pixmap,
        _ => allocate(width, height).ok_or_else(|| {
            warn!("skipping {} render: no {}x{} surface", kind, width, height);
            RenderError::SurfaceUnavailable { width, height }
        })?,
    };

    debug!(
        "rendering {} at {}x{} px (pad {}, scale {}, seed {})",
        kind, width, height, padding, scale, options.seed
    );

    let mut canvas = Canvas::from_pixmap(pixmap, scale);
    canvas.clear();
    canvas.translate(padding, padding);
    let mut rng = DeterministicRng::for_element(options.seed, kind);
    renderer.render(&mut canvas, &mut rng);

    Ok(RenderedElement {
        pixmap: canvas.into_pixmap(),
        kind,
        padding,
        scale,
    })
}

fn renderer_for(config: &ElementConfig) -> &dyn ElementRenderer {
    match config {
        ElementConfig::Button(c) => c,
        ElementConfig::HealthBar(c) => c,
        ElementConfig::Panel(c) => c,
        ElementConfig::Crosshair(c) => c,
        ElementConfig::Slot(c) => c,
        ElementConfig::Badge(c) => c,
        ElementConfig::Slider(c) => c,
    }
}

/// Scale used for drawing; non-finite or non-positive values mean 1.
pub fn effective_scale(scale: f32) -> f32 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

/// Device size of the padded surface: `ceil((size + 2 * pad) * scale)`.
pub fn surface_size(width: u32, height: u32, padding: f32, scale: f32) -> (u32, u32) {
    let edge = |logical: u32| ((logical as f32 + 2.0 * padding) * scale).ceil() as u32;
    (edge(width), edge(height))
}

fn allocate(width: u32, height: u32) -> Option<Pixmap> {
    if width > MAX_SURFACE_DIM || height > MAX_SURFACE_DIM {
        return None;
    }
    Pixmap::new(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_scale() {
        assert_eq!(effective_scale(2.0), 2.0);
        assert_eq!(effective_scale(0.0), 1.0);
        assert_eq!(effective_scale(-1.0), 1.0);
        assert_eq!(effective_scale(f32::NAN), 1.0);
        assert_eq!(effective_scale(f32::INFINITY), 1.0);
    }

    #[test]
    fn test_surface_size() {
        assert_eq!(surface_size(300, 32, 10.0, 1.0), (320, 52));
        assert_eq!(surface_size(64, 64, 0.0, 1.5), (96, 96));
        assert_eq!(surface_size(10, 10, 0.0, 1.25), (13, 13));
    }

    #[test]
    fn test_zero_size_surface_is_unavailable() {
        let mut config = ElementConfig::default_for(ElementKind::Crosshair);
        if let ElementConfig::Crosshair(c) = &mut config {
            c.width = 0;
        }
        let err = render_element(&config, &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, RenderError::SurfaceUnavailable { width: 0, .. }));
    }

    #[test]
    fn test_surface_reused_between_calls() {
        let mut dispatcher = RenderDispatcher::new();
        let config = ElementConfig::default_for(ElementKind::Badge);
        let options = RenderOptions::default();
        let first = dispatcher.render(&config, &options).unwrap().pixmap().data().to_vec();
        let second = dispatcher.render(&config, &options).unwrap().pixmap().data().to_vec();
        assert_eq!(first, second);
    }
}
