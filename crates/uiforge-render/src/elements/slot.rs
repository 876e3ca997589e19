//! Inventory slots with rarity glow and hotkey badge.

use uiforge_spec::{SlotConfig, SlotStyle};

use super::ElementRenderer;
use crate::canvas::Canvas;
use crate::color;
use crate::gradient;
use crate::path::{shape_path, ShapeKind};
use crate::rng::DeterministicRng;
use crate::shadow::Shadow;
use crate::text::TextStyle;

const HOTKEY_SIZE: f32 = 20.0;
const HOTKEY_MARGIN: f32 = 2.0;
/// Opacity of the rarity color at the glow's outer radius (0x88).
const RARITY_EDGE_ALPHA: f32 = 136.0 / 255.0;

impl ElementRenderer for SlotConfig {
    fn padding(&self) -> f32 {
        5.0
    }

    fn render(&self, canvas: &mut Canvas, _rng: &mut DeterministicRng) {
        let w = self.width as f32;
        let h = self.height as f32;
        let outline_kind = if self.style == SlotStyle::Scifi {
            ShapeKind::Chamfer
        } else {
            ShapeKind::Round
        };
        let outline = shape_path(0.0, 0.0, w, h, self.border_radius, outline_kind);

        // Background
        if self.style == SlotStyle::Mmo {
            if let Some(frame) = shape_path(0.0, 0.0, w, h, 0.0, ShapeKind::Rect) {
                let bevel = gradient::linear(
                    0.0,
                    0.0,
                    0.0,
                    h,
                    &[(0.0, color::hex("#334155")), (1.0, color::hex("#0f172a"))],
                );
                canvas.fill_path(&frame, bevel);
            }
            canvas.fill_rect(4.0, 4.0, w - 8.0, h - 8.0, color::hex(&self.bg_color));
        } else if let Some(body) = &outline {
            canvas.fill_path(body, color::hex(&self.bg_color));
        }

        let Some(outline) = outline else {
            return;
        };

        if let Some(rarity) = self.rarity() {
            let tint = color::hex_to_rgb(rarity);
            let glow = gradient::radial(
                w / 2.0,
                h / 2.0,
                0.0,
                w * 0.7,
                &[(0.0, tint.with_alpha(0.0)), (1.0, tint.with_alpha(RARITY_EDGE_ALPHA))],
            );
            canvas.save();
            canvas.clip(&outline);
            canvas.fill_path(&outline, glow);
            canvas.restore();
        }

        if self.border_width > 0.0 {
            canvas.stroke_path(&outline, color::hex(&self.border_color), self.border_width);
        }

        if self.inner_shadow {
            canvas.save();
            canvas.set_shadow(Shadow::new(color::black(), 10.0));
            canvas.stroke_path(&outline, color::rgba(0, 0, 0, 0.5), 4.0);
            canvas.restore();
        }

        if self.show_hotkey {
            let x = w - HOTKEY_SIZE - HOTKEY_MARGIN;
            let y = h - HOTKEY_SIZE - HOTKEY_MARGIN;
            canvas.fill_rect(x, y, HOTKEY_SIZE, HOTKEY_SIZE, color::black());
            canvas.fill_text(
                &self.hotkey_text,
                x + HOTKEY_SIZE / 2.0,
                y + HOTKEY_SIZE / 2.0 + 1.0,
                &TextStyle::new(10.0),
                color::white(),
            );
        }
    }
}
