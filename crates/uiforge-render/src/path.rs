//! Outline construction shared by every element renderer.
//!
//! All builders return `None` for outlines that cannot be represented
//! (non-finite coordinates, no segments). Callers treat that as "nothing
//! to draw" rather than an error.

use tiny_skia::{Path, PathBuilder, Point, Rect};
use uiforge_spec::BarShape;

/// Control-point factor for approximating a quarter circle with a cubic.
const KAPPA: f32 = 0.552_284_8;

/// Horizontal skew of the `slash` outline, as a fraction of its height.
pub const SLASH_SKEW: f32 = 0.4;

/// Corner treatment for [`shape_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Axis-aligned rectangle; the corner parameter is ignored.
    Rect,
    /// Curved corners of the given radius, one quadratic per corner.
    Round,
    /// Straight corner cuts of the given length.
    Chamfer,
    /// Parallelogram leaning right; the corner parameter is ignored.
    Slash,
}

impl ShapeKind {
    /// Maps a health bar shape; unknown shapes have no outline.
    pub fn from_bar_shape(shape: BarShape) -> Option<Self> {
        match shape {
            BarShape::Rect => Some(ShapeKind::Rect),
            BarShape::Round => Some(ShapeKind::Round),
            BarShape::Chamfer => Some(ShapeKind::Chamfer),
            BarShape::Slash => Some(ShapeKind::Slash),
            BarShape::Unknown => None,
        }
    }
}

/// Builds the outline of a box with the given corner treatment.
///
/// `corner` is not clamped: values above half the shorter side produce
/// self-intersecting outlines, which are drawn as-is.
pub fn shape_path(x: f32, y: f32, w: f32, h: f32, corner: f32, kind: ShapeKind) -> Option<Path> {
    let mut pb = PathBuilder::new();
    match kind {
        ShapeKind::Rect => {
            pb.move_to(x, y);
            pb.line_to(x + w, y);
            pb.line_to(x + w, y + h);
            pb.line_to(x, y + h);
            pb.close();
        }
        ShapeKind::Round => {
            let r = corner;
            pb.move_to(x + r, y);
            pb.line_to(x + w - r, y);
            pb.quad_to(x + w, y, x + w, y + r);
            pb.line_to(x + w, y + h - r);
            pb.quad_to(x + w, y + h, x + w - r, y + h);
            pb.line_to(x + r, y + h);
            pb.quad_to(x, y + h, x, y + h - r);
            pb.line_to(x, y + r);
            pb.quad_to(x, y, x + r, y);
            pb.close();
        }
        ShapeKind::Chamfer => {
            let c = corner;
            pb.move_to(x + c, y);
            pb.line_to(x + w - c, y);
            pb.line_to(x + w, y + c);
            pb.line_to(x + w, y + h - c);
            pb.line_to(x + w - c, y + h);
            pb.line_to(x + c, y + h);
            pb.line_to(x, y + h - c);
            pb.line_to(x, y + c);
            pb.close();
        }
        ShapeKind::Slash => {
            let skew = h * SLASH_SKEW;
            pb.move_to(x + skew, y);
            pb.line_to(x + w, y);
            pb.line_to(x + w - skew, y + h);
            pb.line_to(x, y + h);
            pb.close();
        }
    }
    pb.finish()
}

/// Rounded rectangle with circular corners.
///
/// Unlike [`shape_path`], radii are fitted to the box: a radius larger than
/// half a side is scaled down so the outline stays convex. Negative radii
/// are treated as zero. Boxes with no area have no outline.
pub fn rounded_rect(x: f32, y: f32, w: f32, h: f32, radius: f32) -> Option<Path> {
    if !(w > 0.0 && h > 0.0) {
        return None;
    }

    let mut r = if radius.is_finite() { radius.max(0.0) } else { 0.0 };
    if r > 0.0 {
        let fit = (w / (2.0 * r)).min(h / (2.0 * r));
        if fit < 1.0 {
            r *= fit;
        }
    }
    if r == 0.0 {
        return rect(x, y, w, h);
    }

    let k = r * KAPPA;
    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(x + w - r, y);
    pb.cubic_to(x + w - r + k, y, x + w, y + r - k, x + w, y + r);
    pb.line_to(x + w, y + h - r);
    pb.cubic_to(x + w, y + h - r + k, x + w - r + k, y + h, x + w - r, y + h);
    pb.line_to(x + r, y + h);
    pb.cubic_to(x + r - k, y + h, x, y + h - r + k, x, y + h - r);
    pb.line_to(x, y + r);
    pb.cubic_to(x, y + r - k, x + r - k, y, x + r, y);
    pb.close();
    pb.finish()
}

/// Axis-aligned rectangle. Negative sizes have no outline.
pub fn rect(x: f32, y: f32, w: f32, h: f32) -> Option<Path> {
    Rect::from_xywh(x, y, w, h).map(PathBuilder::from_rect)
}

/// Full circle. Non-positive radii have no outline.
pub fn circle(cx: f32, cy: f32, r: f32) -> Option<Path> {
    PathBuilder::from_circle(cx, cy, r)
}

/// Polygon through `points`, closed back to the first point.
pub fn polygon(points: &[Point]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    pb.close();
    pb.finish()
}

/// Open polyline through `points`.
pub fn polyline(points: &[Point]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    pb.finish()
}

/// Single straight segment.
pub fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> Option<Path> {
    polyline(&[Point::from_xy(x1, y1), Point::from_xy(x2, y2)])
}
