//! Health bar: background, clipped gradient fill, border and percentage.

use log::debug;
use uiforge_spec::HealthBarConfig;

use super::ElementRenderer;
use crate::canvas::Canvas;
use crate::color;
use crate::gradient;
use crate::noise::apply_noise;
use crate::path::{shape_path, ShapeKind};
use crate::rng::DeterministicRng;
use crate::shadow::Shadow;
use crate::text::{format_percent, TextStyle};

/// Share of the bar height covered by the gloss band.
pub const HIGHLIGHT_FRACTION: f32 = 0.4;

/// Segment rectangles overshoot the bar vertically; the shape clip trims them.
const SEGMENT_OVERSHOOT: f32 = 10.0;

/// Axis-aligned rectangle painted by the fill layer, in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Rectangles the fill layer paints for `value` percent.
///
/// With no segments this is one rectangle `width * value / 100` wide. With
/// `n` segments, each slot `width / n` wide is included whole when its
/// start lies left of the fill edge, and is narrowed by `gap / 2` on both
/// sides. A value of zero or less paints nothing.
pub fn segment_rects(
    width: f32,
    height: f32,
    value: f32,
    segments: u32,
    gap: f32,
) -> Vec<FillRect> {
    if !(value > 0.0) {
        return Vec::new();
    }
    let fill_width = width * value / 100.0;

    if segments == 0 {
        return vec![FillRect {
            x: 0.0,
            y: 0.0,
            width: fill_width,
            height,
        }];
    }

    let seg_width = width / segments as f32;
    (0..segments)
        .map(|i| i as f32 * seg_width)
        .take_while(|&seg_x| seg_x < fill_width)
        .map(|seg_x| FillRect {
            x: seg_x + gap / 2.0,
            y: -SEGMENT_OVERSHOOT,
            width: seg_width - gap,
            height: height + 2.0 * SEGMENT_OVERSHOOT,
        })
        .collect()
}

impl ElementRenderer for HealthBarConfig {
    fn padding(&self) -> f32 {
        10.0
    }

    fn render(&self, canvas: &mut Canvas, rng: &mut DeterministicRng) {
        let w = self.width as f32;
        let h = self.height as f32;
        let outline = ShapeKind::from_bar_shape(self.shape)
            .and_then(|kind| shape_path(0.0, 0.0, w, h, self.border_radius, kind));
        if outline.is_none() {
            debug!("healthbar: no outline for shape {:?}", self.shape);
        }

        // Background
        if let (true, Some(path)) = (self.draw_mode.paints_frame(), &outline) {
            canvas.fill_path(path, color::hex(&self.bg_color));
        }

        // Fill
        if let (true, Some(path)) = (self.draw_mode.paints_fill(), &outline) {
            let rects = segment_rects(w, h, self.value, self.segments, self.segment_gap);
            if !rects.is_empty() {
                let fill = gradient::linear(
                    0.0,
                    0.0,
                    w,
                    0.0,
                    &[
                        (0.0, color::hex(&self.fill_color_start)),
                        (1.0, color::hex(&self.fill_color_end)),
                    ],
                );
                canvas.save();
                canvas.clip(path);
                for r in &rects {
                    canvas.fill_rect(r.x, r.y, r.width, r.height, fill.clone());
                }
                let highlight = color::rgba(255, 255, 255, 0.15);
                canvas.fill_rect(0.0, 0.0, w, h * HIGHLIGHT_FRACTION, highlight);
                canvas.restore();
            }
        }

        // Border
        if let (true, Some(path)) = (self.draw_mode.paints_frame(), &outline) {
            if self.border_width > 0.0 {
                canvas.stroke_path(path, color::hex(&self.border_color), self.border_width);
            }
        }

        apply_noise(canvas.pixmap_mut(), self.noise, rng);

        if self.show_text && self.draw_mode.paints_frame() {
            canvas.save();
            canvas.set_shadow(Shadow::new(color::black(), 3.0));
            canvas.fill_text(
                &format_percent(self.value),
                w / 2.0,
                h / 2.0,
                &TextStyle::bold(14.0),
                color::white(),
            );
            canvas.restore();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuous_fill_width() {
        let rects = segment_rects(200.0, 20.0, 25.0, 0, 4.0);
        assert_eq!(
            rects,
            vec![FillRect {
                x: 0.0,
                y: 0.0,
                width: 50.0,
                height: 20.0
            }]
        );
    }

    #[test]
    fn test_zero_value_paints_nothing() {
        assert!(segment_rects(200.0, 20.0, 0.0, 0, 4.0).is_empty());
        assert!(segment_rects(200.0, 20.0, 0.0, 10, 4.0).is_empty());
        assert!(segment_rects(200.0, 20.0, -5.0, 10, 4.0).is_empty());
    }

    #[test]
    fn test_segments_included_by_start_position() {
        // Fill edge at 70: segments starting at 0, 20, 40, 60 are included
        let rects = segment_rects(200.0, 20.0, 35.0, 10, 4.0);
        assert_eq!(rects.len(), 4);
        assert_eq!(rects[0].x, 2.0);
        assert_eq!(rects[0].width, 16.0);
        assert_eq!(rects[3].x, 62.0);
        assert_eq!(rects[3].y, -10.0);
        assert_eq!(rects[3].height, 40.0);
    }

    #[test]
    fn test_full_value_includes_every_segment() {
        let rects = segment_rects(300.0, 32.0, 100.0, 10, 4.0);
        assert_eq!(rects.len(), 10);
    }

    #[test]
    fn test_segment_boundary_is_exclusive() {
        // Fill edge lands exactly on the start of segment 5
        let rects = segment_rects(200.0, 20.0, 50.0, 10, 0.0);
        assert_eq!(rects.len(), 5);
    }
}
