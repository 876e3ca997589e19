//! Raster drawing surface with a 2D-context style state stack.
//!
//! [`Canvas`] wraps a premultiplied RGBA pixmap and tracks the current
//! transform, clip and drop shadow the way an immediate-mode 2D context
//! does. Element renderers issue fills and strokes in logical coordinates;
//! the base transform maps them to device pixels at the output scale.

use tiny_skia::{
    Color, FillRule, Mask, Paint, Path, Pixmap, PixmapPaint, Shader, Stroke, Transform,
};

use crate::shadow::{render_shadow_layer, Shadow};
use crate::text::{text_path, TextStyle};

/// Miter limit used for all strokes.
const MITER_LIMIT: f32 = 10.0;

/// Paint source for fills and strokes: a solid color or a gradient.
#[derive(Debug, Clone)]
pub struct Brush(Shader<'static>);

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush(Shader::SolidColor(color))
    }
}

impl From<Shader<'static>> for Brush {
    fn from(shader: Shader<'static>) -> Self {
        Brush(shader)
    }
}

impl Brush {
    fn into_paint(self) -> Paint<'static> {
        Paint {
            shader: self.0,
            anti_alias: true,
            ..Paint::default()
        }
    }
}

#[derive(Clone)]
struct DrawState {
    transform: Transform,
    clip: Option<Mask>,
    shadow: Option<Shadow>,
}

/// A drawing surface owned by one render pass.
pub struct Canvas {
    pixmap: Pixmap,
    scale: f32,
    state: DrawState,
    stack: Vec<DrawState>,
}

impl Canvas {
    /// Wraps an existing pixmap. `scale` maps logical units to pixels.
    pub fn from_pixmap(pixmap: Pixmap, scale: f32) -> Self {
        Self {
            pixmap,
            scale,
            state: DrawState {
                transform: Transform::from_scale(scale, scale),
                clip: None,
                shadow: None,
            },
            stack: Vec::new(),
        }
    }

    /// Allocates a transparent surface of `width` x `height` device pixels.
    pub fn new(width: u32, height: u32, scale: f32) -> Option<Self> {
        Pixmap::new(width, height).map(|pixmap| Self::from_pixmap(pixmap, scale))
    }

    /// Device width in pixels.
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Device height in pixels.
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Logical-to-device scale factor.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Borrow the underlying pixmap.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Mutable access for pixel post-processing.
    pub fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    /// Releases the pixmap.
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Clears every pixel to transparent and resets the state stack.
    pub fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
        self.stack.clear();
        self.state = DrawState {
            transform: Transform::from_scale(self.scale, self.scale),
            clip: None,
            shadow: None,
        };
    }

    /// Pushes the current transform, clip and shadow.
    pub fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    /// Pops the last saved state. Unbalanced calls are ignored.
    pub fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    /// Moves the origin by `(dx, dy)` logical units.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.state.transform = self.state.transform.pre_translate(dx, dy);
    }

    /// Restricts later drawing to the interior of `path`, intersected with
    /// any clip already active.
    pub fn clip(&mut self, path: &Path) {
        let transform = self.state.transform;
        match self.state.clip.as_mut() {
            Some(mask) => mask.intersect_path(path, FillRule::Winding, true, transform),
            None => {
                if let Some(mut mask) = Mask::new(self.pixmap.width(), self.pixmap.height()) {
                    mask.fill_path(path, FillRule::Winding, true, transform);
                    self.state.clip = Some(mask);
                }
            }
        }
    }

    /// Enables a drop shadow for subsequent fills and strokes.
    pub fn set_shadow(&mut self, shadow: Shadow) {
        self.state.shadow = Some(shadow);
    }

    /// Disables the drop shadow.
    pub fn clear_shadow(&mut self) {
        self.state.shadow = None;
    }

    /// Fills `path` with the nonzero winding rule.
    pub fn fill_path(&mut self, path: &Path, brush: impl Into<Brush>) {
        let paint = brush.into().into_paint();
        let transform = self.state.transform;
        self.paint(|pixmap, mask| {
            pixmap.fill_path(path, &paint, FillRule::Winding, transform, mask);
        });
    }

    /// Strokes `path` with butt caps and miter joins. Non-positive widths
    /// draw nothing.
    pub fn stroke_path(&mut self, path: &Path, brush: impl Into<Brush>, width: f32) {
        if !(width.is_finite() && width > 0.0) {
            return;
        }
        let paint = brush.into().into_paint();
        let stroke = Stroke {
            width,
            miter_limit: MITER_LIMIT,
            ..Stroke::default()
        };
        let transform = self.state.transform;
        self.paint(|pixmap, mask| {
            pixmap.stroke_path(path, &paint, &stroke, transform, mask);
        });
    }

    /// Fills an axis-aligned rectangle. Negative sizes draw nothing.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, brush: impl Into<Brush>) {
        if let Some(path) = crate::path::rect(x, y, w, h) {
            self.fill_path(&path, brush);
        }
    }

    /// Draws `text` centered on `(x, y)` with the bitmap font.
    pub fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        style: &TextStyle,
        brush: impl Into<Brush>,
    ) {
        if let Some(path) = text_path(text, x, y, style) {
            self.fill_path(&path, brush);
        }
    }

    /// Straight-alpha RGBA of the device pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    /// Runs one draw operation, preceded by its shadow when one is active.
    fn paint<F>(&mut self, draw: F)
    where
        F: Fn(&mut Pixmap, Option<&Mask>),
    {
        let Canvas {
            pixmap,
            scale,
            state,
            ..
        } = self;

        if let Some(shadow) = state.shadow.filter(Shadow::is_visible) {
            let layer =
                render_shadow_layer(pixmap.width(), pixmap.height(), &shadow, *scale, &draw);
            if let Some(layer) = layer {
                let dx = (shadow.offset_x * *scale).round() as i32;
                let dy = (shadow.offset_y * *scale).round() as i32;
                pixmap.draw_pixmap(
                    dx,
                    dy,
                    layer.as_ref(),
                    &PixmapPaint::default(),
                    Transform::identity(),
                    state.clip.as_ref(),
                );
            }
        }

        draw(pixmap, state.clip.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use crate::path;

    #[test]
    fn test_fill_rect_paints_pixels() {
        let mut canvas = Canvas::new(10, 10, 1.0).unwrap();
        canvas.fill_rect(2.0, 2.0, 4.0, 4.0, color::hex("#ff0000"));

        assert_eq!(canvas.pixel(3, 3), Some([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(8, 8), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_translate_and_restore() {
        let mut canvas = Canvas::new(20, 20, 1.0).unwrap();
        canvas.save();
        canvas.translate(10.0, 10.0);
        canvas.fill_rect(0.0, 0.0, 2.0, 2.0, color::white());
        canvas.restore();
        canvas.fill_rect(0.0, 0.0, 2.0, 2.0, color::black());

        assert_eq!(canvas.pixel(11, 11), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(1, 1), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_clip_restricts_drawing() {
        let mut canvas = Canvas::new(20, 20, 1.0).unwrap();
        canvas.save();
        canvas.clip(&path::rect(0.0, 0.0, 10.0, 20.0).unwrap());
        canvas.fill_rect(0.0, 0.0, 20.0, 20.0, color::white());
        canvas.restore();

        assert_eq!(canvas.pixel(5, 5).map(|p| p[3]), Some(255));
        assert_eq!(canvas.pixel(15, 5).map(|p| p[3]), Some(0));
    }

    #[test]
    fn test_nested_clips_intersect() {
        let mut canvas = Canvas::new(20, 20, 1.0).unwrap();
        canvas.clip(&path::rect(0.0, 0.0, 10.0, 20.0).unwrap());
        canvas.clip(&path::rect(5.0, 0.0, 15.0, 20.0).unwrap());
        canvas.fill_rect(0.0, 0.0, 20.0, 20.0, color::white());

        assert_eq!(canvas.pixel(2, 5).map(|p| p[3]), Some(0));
        assert_eq!(canvas.pixel(7, 5).map(|p| p[3]), Some(255));
        assert_eq!(canvas.pixel(15, 5).map(|p| p[3]), Some(0));
    }

    #[test]
    fn test_scale_maps_logical_units() {
        let mut canvas = Canvas::new(20, 20, 2.0).unwrap();
        canvas.fill_rect(0.0, 0.0, 5.0, 5.0, color::white());

        assert_eq!(canvas.pixel(9, 9).map(|p| p[3]), Some(255));
        assert_eq!(canvas.pixel(11, 11).map(|p| p[3]), Some(0));
    }

    #[test]
    fn test_shadow_paints_outside_shape() {
        let mut canvas = Canvas::new(40, 40, 1.0).unwrap();
        canvas.set_shadow(Shadow::new(color::black(), 4.0));
        canvas.fill_rect(10.0, 10.0, 20.0, 20.0, color::white());

        // The shape itself stays white
        assert_eq!(canvas.pixel(20, 20), Some([255, 255, 255, 255]));
        // The halo leaks a little alpha just outside the shape
        let halo = canvas.pixel(8, 20).unwrap();
        assert!(halo[3] > 0, "expected shadow alpha, got {:?}", halo);
        // Far corners remain untouched
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_zero_width_stroke_is_noop() {
        let mut canvas = Canvas::new(10, 10, 1.0).unwrap();
        canvas.stroke_path(&path::rect(1.0, 1.0, 8.0, 8.0).unwrap(), color::white(), 0.0);
        assert!(canvas.pixmap().pixels().iter().all(|p| p.alpha() == 0));
    }
}
