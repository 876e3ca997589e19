//! Centered labels rendered from the bitmap font as vector rectangles.

use tiny_skia::{Path, PathBuilder, Rect};

use crate::font::{glyph, is_lit, GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Extra width added to each lit run of a bold glyph, in font pixels.
const BOLD_SPREAD: f32 = 0.35;

/// Font size and weight for a label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Nominal size in logical units; one font pixel is `size / 8`.
    pub size: f32,
    pub bold: bool,
}

impl TextStyle {
    pub fn new(size: f32) -> Self {
        Self { size, bold: false }
    }

    pub fn bold(size: f32) -> Self {
        Self { size, bold: true }
    }

    fn unit(&self) -> f32 {
        self.size / 8.0
    }
}

/// Logical `(width, height)` of `text` set in `style`.
pub fn measure(text: &str, style: &TextStyle) -> (f32, f32) {
    let count = text.chars().count() as u32;
    if count == 0 {
        return (0.0, 0.0);
    }
    let unit = style.unit();
    let cols = count * GLYPH_ADVANCE - 1;
    (cols as f32 * unit, GLYPH_HEIGHT as f32 * unit)
}

/// Outline of `text` centered on `(cx, cy)`. Returns `None` when nothing
/// would be drawn.
pub fn text_path(text: &str, cx: f32, cy: f32, style: &TextStyle) -> Option<Path> {
    if !(style.size.is_finite() && style.size > 0.0) {
        return None;
    }
    let unit = style.unit();
    let (width, height) = measure(text, style);
    let left = cx - width / 2.0;
    let top = cy - height / 2.0;
    let spread = if style.bold { BOLD_SPREAD * unit } else { 0.0 };

    let mut pb = PathBuilder::new();
    for (i, ch) in text.chars().enumerate() {
        let origin = left + (i as u32 * GLYPH_ADVANCE) as f32 * unit;
        for (row_index, &row) in glyph(ch).iter().enumerate() {
            let y = top + row_index as f32 * unit;
            let mut col = 0;
            while col < GLYPH_WIDTH {
                if !is_lit(row, col) {
                    col += 1;
                    continue;
                }
                let start = col;
                while is_lit(row, col) {
                    col += 1;
                }
                let x = origin + start as f32 * unit;
                let w = (col - start) as f32 * unit + spread;
                if let Some(rect) = Rect::from_xywh(x, y, w, unit) {
                    pb.push_rect(rect);
                }
            }
        }
    }
    pb.finish()
}

/// Formats a percentage without a decimal point when it is whole.
pub fn format_percent(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}%", value as i64)
    } else {
        format!("{}%", value)
    }
}
