//! Panels: translucent body, background pattern, window chrome and border.

use log::debug;
use tiny_skia::{Path, PathBuilder, Point, Rect};
use uiforge_spec::{PanelConfig, PanelPattern, PanelStyle};

use super::ElementRenderer;
use crate::canvas::Canvas;
use crate::color;
use crate::noise::apply_noise;
use crate::path;
use crate::rng::DeterministicRng;
use crate::shadow::Shadow;

/// Corner cut of the `tech` body.
const TECH_CUT: f32 = 20.0;
const GRID_STEP: usize = 20;
const SCANLINE_STEP: usize = 4;
const DOT_STEP: usize = 15;
const DOT_RADIUS: f32 = 1.0;
const GLOW_BLUR: f32 = 20.0;

impl ElementRenderer for PanelConfig {
    fn padding(&self) -> f32 {
        if self.glow {
            20.0
        } else {
            5.0
        }
    }

    fn render(&self, canvas: &mut Canvas, rng: &mut DeterministicRng) {
        let w = self.width as f32;
        let h = self.height as f32;
        let Some(body) = body_path(self, w, h) else {
            debug!("panel: degenerate body {}x{}", self.width, self.height);
            return;
        };

        if self.glow {
            canvas.set_shadow(Shadow::new(color::hex(&self.glow_color), GLOW_BLUR));
        }
        canvas.fill_path(&body, color::hex_alpha(&self.bg_color, self.bg_opacity));

        // The glow stays active through the pattern pass.
        if let Some(pattern) = pattern_path(self.pattern, w, h) {
            canvas.save();
            canvas.clip(&body);
            canvas.fill_path(&pattern, color::rgba(255, 255, 255, self.pattern_opacity));
            canvas.restore();
        }
        canvas.clear_shadow();

        if self.style == PanelStyle::Window && self.header_height > 0.0 {
            draw_title_bar(self, canvas, &body, w);
        }

        if self.border_width > 0.0 {
            canvas.stroke_path(&body, color::hex(&self.border_color), self.border_width);
            match self.style {
                PanelStyle::Double => {
                    canvas.stroke_path(&body, color::rgba(255, 255, 255, 0.2), 1.0);
                }
                PanelStyle::Tech => draw_tech_accents(self, canvas, w, h),
                _ => {}
            }
        }

        if self.pattern == PanelPattern::Noise {
            apply_noise(canvas.pixmap_mut(), self.pattern_opacity, rng);
        }
    }
}

fn body_path(cfg: &PanelConfig, w: f32, h: f32) -> Option<Path> {
    if cfg.style == PanelStyle::Tech {
        let c = TECH_CUT;
        path::polygon(&[
            Point::from_xy(0.0, c),
            Point::from_xy(c, 0.0),
            Point::from_xy(w - c, 0.0),
            Point::from_xy(w, c),
            Point::from_xy(w, h - c),
            Point::from_xy(w - c, h),
            Point::from_xy(c, h),
            Point::from_xy(0.0, h - c),
        ])
    } else {
        path::rounded_rect(0.0, 0.0, w, h, cfg.border_radius)
    }
}

fn draw_title_bar(cfg: &PanelConfig, canvas: &mut Canvas, body: &Path, w: f32) {
    let hh = cfg.header_height;

    canvas.save();
    canvas.clip(body);
    canvas.fill_rect(0.0, 0.0, w, hh, color::rgba(0, 0, 0, 0.3));
    if let Some(close) = path::circle(w - 20.0, hh / 2.0, 6.0) {
        canvas.fill_path(&close, color::hex("#ef4444"));
    }
    canvas.restore();

    if let Some(separator) = path::line(0.0, hh, w, hh) {
        canvas.stroke_path(&separator, color::hex(&cfg.border_color), 1.0);
    }
}

fn draw_tech_accents(cfg: &PanelConfig, canvas: &mut Canvas, w: f32, h: f32) {
    let accent = color::hex(&cfg.glow_color);
    let corners = [
        [(0.0, 40.0), (0.0, 20.0), (20.0, 0.0), (40.0, 0.0)],
        [(w, h - 40.0), (w, h - 20.0), (w - 20.0, h), (w - 40.0, h)],
    ];
    for corner in corners {
        let points: Vec<Point> = corner.iter().map(|&(x, y)| Point::from_xy(x, y)).collect();
        if let Some(line) = path::polyline(&points) {
            canvas.stroke_path(&line, accent, 2.0);
        }
    }
}

/// Geometry of a repeating background pattern over `[0, w] x [0, h]`.
/// Patterns without vector geometry return `None`.
fn pattern_path(pattern: PanelPattern, w: f32, h: f32) -> Option<Path> {
    let mut pb = PathBuilder::new();
    match pattern {
        PanelPattern::Grid => {
            for x in steps(w, GRID_STEP) {
                push_rect(&mut pb, x, 0.0, 1.0, h);
            }
            for y in steps(h, GRID_STEP) {
                push_rect(&mut pb, 0.0, y, w, 1.0);
            }
        }
        PanelPattern::Scanlines => {
            for y in steps(h, SCANLINE_STEP) {
                push_rect(&mut pb, 0.0, y, w, 1.0);
            }
        }
        PanelPattern::Dots => {
            for x in steps(w, DOT_STEP) {
                for y in steps(h, DOT_STEP) {
                    let d = 2.0 * DOT_RADIUS;
                    if let Some(r) = Rect::from_xywh(x - DOT_RADIUS, y - DOT_RADIUS, d, d) {
                        pb.push_oval(r);
                    }
                }
            }
        }
        PanelPattern::None | PanelPattern::Noise | PanelPattern::Unknown => return None,
    }
    pb.finish()
}

fn push_rect(pb: &mut PathBuilder, x: f32, y: f32, w: f32, h: f32) {
    if let Some(r) = Rect::from_xywh(x, y, w, h) {
        pb.push_rect(r);
    }
}

/// `0, step, 2*step, ...` strictly below `limit`.
fn steps(limit: f32, step: usize) -> impl Iterator<Item = f32> {
    let count = if limit > 0.0 { limit.ceil() as usize } else { 0 };
    (0..count).step_by(step).map(|v| v as f32).filter(move |&v| v < limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps() {
        assert_eq!(steps(45.0, 20).collect::<Vec<_>>(), vec![0.0, 20.0, 40.0]);
        assert_eq!(steps(40.0, 20).collect::<Vec<_>>(), vec![0.0, 20.0]);
        assert_eq!(steps(0.0, 20).count(), 0);
    }

    #[test]
    fn test_patterns_without_geometry() {
        assert!(pattern_path(PanelPattern::None, 100.0, 100.0).is_none());
        assert!(pattern_path(PanelPattern::Noise, 100.0, 100.0).is_none());
        assert!(pattern_path(PanelPattern::Unknown, 100.0, 100.0).is_none());
    }

    #[test]
    fn test_grid_covers_body() {
        let path = pattern_path(PanelPattern::Grid, 100.0, 60.0).unwrap();
        let bounds = path.bounds();
        assert_eq!(bounds.left(), 0.0);
        assert_eq!(bounds.top(), 0.0);
        assert_eq!(bounds.right(), 100.0);
        assert_eq!(bounds.bottom(), 60.0);
    }

    #[test]
    fn test_tech_body_is_octagon() {
        let config = PanelConfig {
            style: PanelStyle::Tech,
            ..PanelConfig::default()
        };
        let body = body_path(&config, 200.0, 100.0).unwrap();
        assert_eq!(body.points().len(), 8);
        assert_eq!(body.points()[0], Point::from_xy(0.0, 20.0));
    }
}
