//! Crosshair reticles in six layouts.

use tiny_skia::{Path, PathBuilder, Point};
use uiforge_spec::{CrosshairConfig, CrosshairType};

use super::ElementRenderer;
use crate::canvas::Canvas;
use crate::color;
use crate::path;
use crate::rng::DeterministicRng;
use crate::shadow::Shadow;

const SHADOW_BLUR: f32 = 4.0;
/// Reticle radius of the `sniper` layout, relative to the canvas width.
const SNIPER_RADIUS: f32 = 0.4;
const SNIPER_DOT_RADIUS: f32 = 2.0;

impl ElementRenderer for CrosshairConfig {
    fn padding(&self) -> f32 {
        0.0
    }

    fn render(&self, canvas: &mut Canvas, _rng: &mut DeterministicRng) {
        let w = self.width as f32;
        let h = self.height as f32;
        let (cx, cy) = (w / 2.0, h / 2.0);
        let main = color::hex(&self.color);
        let outline = color::hex(&self.outline_color);

        if self.shadow {
            canvas.set_shadow(Shadow::new(color::black(), SHADOW_BLUR));
        }

        if self.kind == CrosshairType::Dot || self.dot_size > 0.0 {
            if self.outline_width > 0.0 {
                if let Some(ring) = path::circle(cx, cy, self.dot_size + self.outline_width) {
                    canvas.fill_path(&ring, outline);
                }
            }
            if let Some(dot) = path::circle(cx, cy, self.dot_size) {
                canvas.fill_path(&dot, main);
            }
        }

        match self.kind {
            CrosshairType::Cross | CrosshairType::TShape => {
                let (gap, len) = (self.gap, self.length);
                if self.kind != CrosshairType::TShape {
                    stroke_arm(self, canvas, cx, cy - gap, cx, cy - gap - len);
                }
                stroke_arm(self, canvas, cx, cy + gap, cx, cy + gap + len);
                stroke_arm(self, canvas, cx - gap, cy, cx - gap - len, cy);
                stroke_arm(self, canvas, cx + gap, cy, cx + gap + len, cy);
            }
            CrosshairType::Circle => {
                if let Some(ring) = path::circle(cx, cy, self.gap + self.length) {
                    if self.outline_width > 0.0 {
                        let width = self.thickness + self.outline_width * 2.0;
                        canvas.stroke_path(&ring, outline, width);
                    }
                    canvas.stroke_path(&ring, main, self.thickness);
                }
            }
            CrosshairType::Chevron => {
                let s = self.gap + 5.0;
                let l = self.length;
                if let Some(arms) = segments(&[
                    ((cx - s - l, cy), (cx - s, cy)),
                    ((cx + s, cy), (cx + s + l, cy)),
                    ((cx, cy - s - l), (cx, cy - s)),
                ]) {
                    canvas.stroke_path(&arms, main, self.thickness);
                }
                if let Some(tip) = path::polygon(&[
                    Point::from_xy(cx - 4.0, cy + s),
                    Point::from_xy(cx + 4.0, cy + s),
                    Point::from_xy(cx, cy + s + 6.0),
                ]) {
                    canvas.fill_path(&tip, main);
                }
            }
            CrosshairType::Sniper => {
                if let Some(guides) = segments(&[((0.0, cy), (w, cy)), ((cx, 0.0), (cx, h))]) {
                    canvas.stroke_path(&guides, outline, 1.0);
                }
                let radius = w * SNIPER_RADIUS;
                if let Some(reticle) = path::circle(cx, cy, radius) {
                    canvas.stroke_path(&reticle, main, self.thickness);
                }
                for i in 1..5 {
                    let d = radius / 5.0 * i as f32;
                    for x in [cx + d, cx - d] {
                        if let Some(dot) = path::circle(x, cy, SNIPER_DOT_RADIUS) {
                            canvas.fill_path(&dot, main);
                        }
                    }
                }
            }
            CrosshairType::Dot | CrosshairType::Unknown => {}
        }
    }
}

/// One arm: an optional wider outline stroke without shadow, then the
/// main stroke.
fn stroke_arm(cfg: &CrosshairConfig, canvas: &mut Canvas, x1: f32, y1: f32, x2: f32, y2: f32) {
    let Some(arm) = path::line(x1, y1, x2, y2) else {
        return;
    };
    if cfg.outline_width > 0.0 {
        canvas.save();
        canvas.clear_shadow();
        canvas.stroke_path(
            &arm,
            color::hex(&cfg.outline_color),
            cfg.thickness + cfg.outline_width * 2.0,
        );
        canvas.restore();
    }
    canvas.stroke_path(&arm, color::hex(&cfg.color), cfg.thickness);
}

/// Disjoint straight segments in a single path.
fn segments(pairs: &[((f32, f32), (f32, f32))]) -> Option<Path> {
    let mut pb = PathBuilder::new();
    for &((x1, y1), (x2, y2)) in pairs {
        pb.move_to(x1, y1);
        pb.line_to(x2, y2);
    }
    pb.finish()
}
