//! Badges: gradient-filled emblem, optional ribbon and centered label.

use std::f32::consts::{FRAC_PI_3, PI};

use log::debug;
use tiny_skia::{Path, PathBuilder, Point};
use uiforge_spec::{BadgeConfig, BadgeShape};

use super::ElementRenderer;
use crate::canvas::Canvas;
use crate::color;
use crate::gradient;
use crate::path;
use crate::rng::DeterministicRng;
use crate::shadow::Shadow;
use crate::text::TextStyle;

/// Distance between the emblem's outer radius and the shorter half-side.
pub const BADGE_INSET: f32 = 10.0;

const STAR_SPIKES: usize = 5;
const LABEL_SIZE: f32 = 24.0;

/// Star vertices, alternating outer and inner radius, starting at the top.
/// The inner radius is half the outer one.
pub fn star_points(cx: f32, cy: f32, outer: f32) -> Vec<Point> {
    let inner = outer / 2.0;
    let step = PI / STAR_SPIKES as f32;
    (0..STAR_SPIKES * 2)
        .map(|i| {
            let angle = 1.5 * PI + step * i as f32;
            let r = if i % 2 == 0 { outer } else { inner };
            Point::from_xy(cx + angle.cos() * r, cy + angle.sin() * r)
        })
        .collect()
}

/// Hexagon vertices at 60 degree steps, starting on the positive x axis.
pub fn hexagon_points(cx: f32, cy: f32, size: f32) -> Vec<Point> {
    (0..6)
        .map(|i| {
            let angle = FRAC_PI_3 * i as f32;
            Point::from_xy(cx + size * angle.cos(), cy + size * angle.sin())
        })
        .collect()
}

/// Ribbon banner polygon hanging across the lower half of the emblem.
pub fn ribbon_points(cx: f32, cy: f32, size: f32) -> [Point; 5] {
    [
        Point::from_xy(cx - size, cy + size * 0.5),
        Point::from_xy(cx + size, cy + size * 0.5),
        Point::from_xy(cx + size + 10.0, cy + size * 0.8),
        Point::from_xy(cx, cy + size + 5.0),
        Point::from_xy(cx - size - 10.0, cy + size * 0.8),
    ]
}

fn shield_path(cx: f32, cy: f32, size: f32) -> Option<Path> {
    let half = size * 0.8;
    let mut pb = PathBuilder::new();
    pb.move_to(cx - half, cy - half);
    pb.line_to(cx + half, cy - half);
    pb.line_to(cx + half, cy);
    pb.quad_to(cx + half, cy + size, cx, cy + size);
    pb.quad_to(cx - half, cy + size, cx - half, cy);
    pb.close();
    pb.finish()
}

/// Outline of `shape` centered on `(cx, cy)` with outer radius `size`.
pub(crate) fn emblem_path(shape: BadgeShape, cx: f32, cy: f32, size: f32) -> Option<Path> {
    match shape {
        BadgeShape::Circle => path::circle(cx, cy, size),
        BadgeShape::Diamond => path::polygon(&[
            Point::from_xy(cx, cy - size),
            Point::from_xy(cx + size, cy),
            Point::from_xy(cx, cy + size),
            Point::from_xy(cx - size, cy),
        ]),
        BadgeShape::Hexagon => path::polygon(&hexagon_points(cx, cy, size)),
        BadgeShape::Shield => shield_path(cx, cy, size),
        BadgeShape::Star => path::polygon(&star_points(cx, cy, size)),
        BadgeShape::Unknown => None,
    }
}

impl ElementRenderer for BadgeConfig {
    fn padding(&self) -> f32 {
        10.0
    }

    fn render(&self, canvas: &mut Canvas, _rng: &mut DeterministicRng) {
        let w = self.width as f32;
        let h = self.height as f32;
        let (cx, cy) = (w / 2.0, h / 2.0);
        let size = w.min(h) / 2.0 - BADGE_INSET;

        match emblem_path(self.shape, cx, cy, size) {
            Some(emblem) => {
                let fill = gradient::linear(
                    cx,
                    cy - size,
                    cx,
                    cy + size,
                    &[
                        (0.0, color::hex(&self.primary_color)),
                        (1.0, color::hex(&self.secondary_color)),
                    ],
                );
                canvas.fill_path(&emblem, fill);
                if self.border_width > 0.0 {
                    canvas.stroke_path(&emblem, color::hex(&self.border_color), self.border_width);
                }
            }
            None => debug!("badge: no outline for shape {:?} at size {}", self.shape, size),
        }

        if self.ribbon {
            if let Some(banner) = path::polygon(&ribbon_points(cx, cy, size)) {
                canvas.fill_path(&banner, color::hex("#b91c1c"));
            }
        }

        canvas.save();
        canvas.set_shadow(Shadow::new(color::rgba(0, 0, 0, 0.8), 4.0));
        canvas.fill_text(&self.icon_text, cx, cy, &TextStyle::bold(LABEL_SIZE), color::white());
        canvas.restore();
    }
}
