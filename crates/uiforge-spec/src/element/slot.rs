//! Inventory slot configuration.

use serde::{Deserialize, Serialize};

/// Rarity color value that disables the rarity glow.
pub const NO_RARITY: &str = "none";

/// Parameters for an inventory slot element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct SlotConfig {
    /// Logical width in pixels.
    pub width: u32,
    /// Logical height in pixels.
    pub height: u32,
    /// Output scale factor.
    pub scale: f32,

    /// Rarity glow color (hex), or `"none"`.
    pub rarity_color: String,
    /// Slot background color (hex).
    pub bg_color: String,
    /// Border color (hex).
    pub border_color: String,
    /// Border stroke width; 0 disables the border.
    pub border_width: f32,
    /// Corner radius, or chamfer length for `scifi`.
    pub border_radius: f32,
    /// Whether the inner shadow pass is drawn.
    pub inner_shadow: bool,
    /// Whether the hotkey badge is drawn.
    pub show_hotkey: bool,
    /// Hotkey label.
    pub hotkey_text: String,
    /// Background treatment.
    pub style: SlotStyle,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            scale: 1.0,
            rarity_color: "#eab308".to_string(),
            bg_color: "#0f172a".to_string(),
            border_color: "#475569".to_string(),
            border_width: 2.0,
            border_radius: 4.0,
            inner_shadow: true,
            show_hotkey: true,
            hotkey_text: "Q".to_string(),
            style: SlotStyle::Mmo,
        }
    }
}

impl SlotConfig {
    /// Returns the rarity color unless the glow is disabled.
    pub fn rarity(&self) -> Option<&str> {
        let trimmed = self.rarity_color.trim();
        if trimmed.eq_ignore_ascii_case(NO_RARITY) {
            None
        } else {
            Some(trimmed)
        }
    }
}

/// Slot background treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStyle {
    /// Rounded body.
    Simple,
    /// Beveled two-tone frame with an inset.
    Mmo,
    /// Chamfered body.
    Scifi,
    #[serde(other)]
    Unknown,
}
