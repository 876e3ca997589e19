//! Sliders: rounded track, progress fill and a beveled thumb.

use tiny_skia::{Path, Point};
use uiforge_spec::{SliderConfig, SliderDrawMode, SliderOrientation, ThumbShape};

use super::ElementRenderer;
use crate::canvas::Canvas;
use crate::color;
use crate::path;
use crate::rng::DeterministicRng;

/// Track thickness across the slider axis, in logical units.
pub const TRACK_THICKNESS: f32 = 12.0;

/// Resolved track, fill and thumb geometry for one slider configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderLayout {
    pub vertical: bool,
    pub track_x: f32,
    pub track_y: f32,
    pub track_width: f32,
    pub track_height: f32,
    /// Progress fraction, `value / 100`, unclamped.
    pub fraction: f32,
    pub thumb_x: f32,
    pub thumb_y: f32,
}

impl SliderLayout {
    pub fn new(config: &SliderConfig) -> Self {
        let w = config.width as f32;
        let h = config.height as f32;
        let vertical = config.orientation == SliderOrientation::Vertical;

        // Leave room for the thumb to overhang both track ends
        let pad = config.thumb_size / 2.0 + 5.0;
        let (track_width, track_height) = if vertical {
            (TRACK_THICKNESS, h - pad * 2.0)
        } else {
            (w - pad * 2.0, TRACK_THICKNESS)
        };
        let track_x = (w - track_width) / 2.0;
        let track_y = (h - track_height) / 2.0;
        let fraction = config.value / 100.0;

        let (thumb_x, thumb_y) = if config.draw_mode == SliderDrawMode::Thumb {
            (w / 2.0, h / 2.0)
        } else if vertical {
            (w / 2.0, track_y + track_height - track_height * fraction)
        } else {
            (track_x + track_width * fraction, h / 2.0)
        };

        Self {
            vertical,
            track_x,
            track_y,
            track_width,
            track_height,
            fraction,
            thumb_x,
            thumb_y,
        }
    }

    /// Progress rectangle `(x, y, width, height)`; grows rightwards, or
    /// upwards from the bottom of a vertical track.
    pub fn fill_rect(&self) -> (f32, f32, f32, f32) {
        if self.vertical {
            let fill_h = self.track_height * self.fraction;
            (self.track_x, self.track_y + self.track_height - fill_h, self.track_width, fill_h)
        } else {
            (self.track_x, self.track_y, self.track_width * self.fraction, self.track_height)
        }
    }
}

fn thumb_path(shape: ThumbShape, x: f32, y: f32, size: f32, vertical: bool) -> Option<Path> {
    let half = size / 2.0;
    match shape {
        ThumbShape::Circle => path::circle(x, y, half),
        ThumbShape::Rect => path::rect(x - half, y - half, size, size),
        ThumbShape::Pill => {
            let (w, h) = if vertical { (size, half) } else { (half, size) };
            path::rect(x - w / 2.0, y - h / 2.0, w, h)
        }
        ThumbShape::Diamond => path::polygon(&[
            Point::from_xy(x, y - half),
            Point::from_xy(x + half, y),
            Point::from_xy(x, y + half),
            Point::from_xy(x - half, y),
        ]),
        ThumbShape::Unknown => None,
    }
}

impl ElementRenderer for SliderConfig {
    fn padding(&self) -> f32 {
        0.0
    }

    fn render(&self, canvas: &mut Canvas, _rng: &mut DeterministicRng) {
        let layout = SliderLayout::new(self);

        if self.draw_mode.paints_track() {
            if let Some(track) = path::rounded_rect(
                layout.track_x,
                layout.track_y,
                layout.track_width,
                layout.track_height,
                self.track_radius,
            ) {
                canvas.fill_path(&track, color::hex(&self.track_color));
                if self.track_border_width > 0.0 {
                    canvas.stroke_path(
                        &track,
                        color::hex(&self.track_border_color),
                        self.track_border_width,
                    );
                }
            }

            let (fx, fy, fw, fh) = layout.fill_rect();
            if let Some(fill) = path::rounded_rect(fx, fy, fw, fh, self.track_radius) {
                canvas.fill_path(&fill, color::hex(&self.fill_color));
            }
        }

        if self.draw_mode.paints_thumb() {
            let s = self.thumb_size;
            let (tx, ty) = (layout.thumb_x, layout.thumb_y);
            let thumb = thumb_path(self.thumb_shape, tx, ty, s, layout.vertical);
            if let Some(thumb) = &thumb {
                canvas.fill_path(thumb, color::hex(&self.thumb_color));
            }

            // Bevel highlight
            if let Some(dot) = path::circle(tx - s / 6.0, ty - s / 6.0, s / 6.0) {
                canvas.fill_path(&dot, color::rgba(255, 255, 255, 0.4));
            }

            if let (Some(thumb), true) = (&thumb, self.thumb_border_width > 0.0) {
                canvas.stroke_path(
                    thumb,
                    color::hex(&self.thumb_border_color),
                    self.thumb_border_width,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pill_swaps_axes() {
        let horizontal = thumb_path(ThumbShape::Pill, 50.0, 50.0, 24.0, false).unwrap();
        assert_eq!(horizontal.bounds().width(), 12.0);
        assert_eq!(horizontal.bounds().height(), 24.0);

        let vertical = thumb_path(ThumbShape::Pill, 50.0, 50.0, 24.0, true).unwrap();
        assert_eq!(vertical.bounds().width(), 24.0);
        assert_eq!(vertical.bounds().height(), 12.0);
    }

    #[test]
    fn test_unknown_thumb_has_no_outline() {
        assert!(thumb_path(ThumbShape::Unknown, 0.0, 0.0, 24.0, false).is_none());
    }
}
