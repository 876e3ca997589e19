//! Buttons in five fill treatments.

use uiforge_spec::{ButtonConfig, ButtonStyle, FontFamily, FontWeight};

use super::ElementRenderer;
use crate::canvas::Canvas;
use crate::color;
use crate::gradient;
use crate::path::{self, shape_path, ShapeKind};
use crate::rng::DeterministicRng;
use crate::shadow::Shadow;
use crate::text::TextStyle;

/// Offset of the hard text shadow used by `pixel` and `cyber`.
const TEXT_SHADOW_OFFSET: f32 = 2.0;

impl ElementRenderer for ButtonConfig {
    fn padding(&self) -> f32 {
        20.0
    }

    fn render(&self, canvas: &mut Canvas, _rng: &mut DeterministicRng) {
        let w = self.width as f32;
        let h = self.height as f32;
        let style = self.style;

        let kind = if style == ButtonStyle::Cyber {
            ShapeKind::Chamfer
        } else {
            ShapeKind::Round
        };
        let Some(body) = shape_path(0.0, 0.0, w, h, self.border_radius, kind) else {
            return;
        };

        // Body, with the drop shadow for the soft styles
        let drop_shadow = self.shadow_blur > 0.0
            && !matches!(style, ButtonStyle::Flat | ButtonStyle::Pixel);
        if drop_shadow {
            canvas.set_shadow(Shadow::new(color::hex(&self.shadow_color), self.shadow_blur));
        }
        if style == ButtonStyle::Glossy {
            let bg = color::hex(&self.bg_color);
            canvas.fill_path(
                &body,
                gradient::linear(0.0, 0.0, 0.0, h, &[(0.0, bg), (0.5, bg), (1.0, color::black())]),
            );
        } else {
            canvas.fill_path(&body, color::hex(&self.bg_color));
        }
        canvas.clear_shadow();

        match style {
            ButtonStyle::Glossy => {
                canvas.save();
                canvas.clip(&body);
                let shine = gradient::linear(
                    0.0,
                    0.0,
                    0.0,
                    h / 2.0,
                    &[
                        (0.0, color::rgba(255, 255, 255, 0.6)),
                        (1.0, color::rgba(255, 255, 255, 0.05)),
                    ],
                );
                canvas.fill_rect(0.0, 0.0, w, h / 2.0, shine);
                canvas.restore();
            }
            ButtonStyle::Neomorphism => {
                // Light from the top-left, dark towards the bottom-right.
                // The edge itself is a plain black hairline.
                let edge = color::black();
                canvas.set_shadow(
                    Shadow::new(color::rgba(255, 255, 255, 0.5), 10.0).with_offset(-4.0, -4.0),
                );
                canvas.stroke_path(&body, edge, 1.0);
                canvas.set_shadow(
                    Shadow::new(color::rgba(0, 0, 0, 0.3), 10.0).with_offset(4.0, 4.0),
                );
                canvas.stroke_path(&body, edge, 1.0);
                canvas.clear_shadow();
            }
            ButtonStyle::Cyber => {
                if let Some(accent) = path::line(10.0, h - 5.0, w - 10.0, h - 5.0) {
                    canvas.stroke_path(&accent, color::rgba(255, 255, 255, 0.5), 1.0);
                }
            }
            ButtonStyle::Flat | ButtonStyle::Pixel | ButtonStyle::Unknown => {}
        }

        if self.border_width > 0.0 && style != ButtonStyle::Neomorphism {
            canvas.stroke_path(&body, color::hex(&self.border_color), self.border_width);
        }

        if self.show_text {
            draw_label(self, canvas, w, h);
        }
    }
}

fn draw_label(cfg: &ButtonConfig, canvas: &mut Canvas, w: f32, h: f32) {
    let text_style = TextStyle {
        size: cfg.font_size,
        bold: cfg.font_weight == FontWeight::Bold,
    };
    let (cx, cy) = (w / 2.0, h / 2.0);

    if matches!(cfg.style, ButtonStyle::Pixel | ButtonStyle::Cyber) {
        canvas.fill_text(
            &cfg.text,
            cx + TEXT_SHADOW_OFFSET,
            cy + TEXT_SHADOW_OFFSET,
            &text_style,
            color::black(),
        );
    }

    let baseline_shift = if cfg.font_family == FontFamily::Pixel {
        cfg.font_size * 0.1
    } else {
        0.0
    };
    canvas.fill_text(
        &cfg.text,
        cx,
        cy + baseline_shift,
        &text_style,
        color::hex(&cfg.text_color),
    );
}
