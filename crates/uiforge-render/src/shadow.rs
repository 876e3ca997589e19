//! Drop shadows: a tinted, blurred copy of a shape composited beneath it.

use tiny_skia::{Color, ColorU8, Mask, Pixmap};

/// Shadow settings applied to subsequent draws on a [`Canvas`](crate::Canvas).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Color,
    /// Blur extent in logical units; the Gaussian sigma is half of it.
    pub blur: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Shadow {
    /// Centered shadow with the given blur.
    pub fn new(color: Color, blur: f32) -> Self {
        Self {
            color,
            blur,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    pub fn with_offset(mut self, offset_x: f32, offset_y: f32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    /// A shadow draws only with a visible color and some blur or offset.
    pub fn is_visible(&self) -> bool {
        self.color.alpha() > 0.0
            && (self.blur > 0.0 || self.offset_x != 0.0 || self.offset_y != 0.0)
    }
}

/// Renders `draw` into a scratch layer and turns its coverage into a
/// blurred silhouette in the shadow color.
pub(crate) fn render_shadow_layer<F>(
    width: u32,
    height: u32,
    shadow: &Shadow,
    scale: f32,
    draw: &F,
) -> Option<Pixmap>
where
    F: Fn(&mut Pixmap, Option<&Mask>),
{
    let mut layer = Pixmap::new(width, height)?;
    draw(&mut layer, None);

    let tint = shadow.color.to_color_u8();
    let strength = f32::from(tint.alpha()) / 255.0;
    let mut alpha: Vec<f32> = layer
        .pixels()
        .iter()
        .map(|p| f32::from(p.alpha()) / 255.0 * strength)
        .collect();

    let sigma = shadow.blur.max(0.0) * scale / 2.0;
    blur_alpha(&mut alpha, width as usize, height as usize, box_radius(sigma));

    for (px, a) in layer.pixels_mut().iter_mut().zip(alpha) {
        let a8 = (a.clamp(0.0, 1.0) * 255.0).round() as u8;
        *px = ColorU8::from_rgba(tint.red(), tint.green(), tint.blue(), a8).premultiply();
    }
    Some(layer)
}

/// Box radius whose three-pass blur approximates a Gaussian of `sigma`.
pub(crate) fn box_radius(sigma: f32) -> usize {
    if !(sigma.is_finite() && sigma > 0.0) {
        return 0;
    }
    let ideal = (4.0 * sigma * sigma + 1.0).sqrt();
    ((ideal - 1.0) / 2.0).round().max(0.0) as usize
}

/// Three horizontal+vertical box passes over a single channel. Samples
/// outside the buffer count as transparent.
pub(crate) fn blur_alpha(data: &mut [f32], w: usize, h: usize, r: usize) {
    if r == 0 || w == 0 || h == 0 {
        return;
    }

    fn box_blur_h(src: &[f32], dst: &mut [f32], w: usize, h: usize, r: usize) {
        let d = (2 * r + 1) as f32;
        for y in 0..h {
            let row = &src[y * w..(y + 1) * w];
            let mut sum: f32 = row[..=r.min(w - 1)].iter().sum();
            for x in 0..w {
                dst[y * w + x] = sum / d;
                if x + r + 1 < w {
                    sum += row[x + r + 1];
                }
                if x >= r {
                    sum -= row[x - r];
                }
            }
        }
    }

    fn box_blur_v(src: &[f32], dst: &mut [f32], w: usize, h: usize, r: usize) {
        let d = (2 * r + 1) as f32;
        for x in 0..w {
            let mut sum: f32 = (0..=r.min(h - 1)).map(|y| src[y * w + x]).sum();
            for y in 0..h {
                dst[y * w + x] = sum / d;
                if y + r + 1 < h {
                    sum += src[(y + r + 1) * w + x];
                }
                if y >= r {
                    sum -= src[(y - r) * w + x];
                }
            }
        }
    }

    let mut scratch = vec![0.0; data.len()];
    for _ in 0..3 {
        box_blur_h(data, &mut scratch, w, h, r);
        box_blur_v(&scratch, data, w, h, r);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility() {
        let black = Color::BLACK;
        assert!(Shadow::new(black, 4.0).is_visible());
        assert!(!Shadow::new(black, 0.0).is_visible());
        assert!(Shadow::new(black, 0.0).with_offset(2.0, 2.0).is_visible());
        assert!(!Shadow::new(Color::TRANSPARENT, 10.0).is_visible());
    }

    #[test]
    fn test_box_radius() {
        assert_eq!(box_radius(0.0), 0);
        assert_eq!(box_radius(-3.0), 0);
        assert_eq!(box_radius(2.0), 2);
        assert_eq!(box_radius(5.0), 5);
    }

    #[test]
    fn test_blur_preserves_mass_away_from_edges() {
        let (w, h) = (21, 21);
        let mut data = vec![0.0f32; w * h];
        data[10 * w + 10] = 1.0;
        blur_alpha(&mut data, w, h, 2);

        let total: f32 = data.iter().sum();
        assert!((total - 1.0).abs() < 1e-3, "total = {}", total);
        assert!(data[10 * w + 10] < 1.0);
        assert!(data[10 * w + 12] > 0.0);
        assert!(data[0].abs() < 1e-6);
    }

    #[test]
    fn test_blur_zero_radius_is_identity() {
        let mut data = vec![0.0, 1.0, 0.5, 0.25];
        blur_alpha(&mut data, 2, 2, 0);
        assert_eq!(data, vec![0.0, 1.0, 0.5, 0.25]);
    }
}
