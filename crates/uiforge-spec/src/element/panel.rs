//! Panel configuration.

use serde::{Deserialize, Serialize};

/// Parameters for a window/panel element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct PanelConfig {
    /// Logical width in pixels.
    pub width: u32,
    /// Logical height in pixels.
    pub height: u32,
    /// Output scale factor.
    pub scale: f32,

    /// Body color (hex).
    pub bg_color: String,
    /// Body opacity (0-1).
    pub bg_opacity: f32,
    /// Border color (hex).
    pub border_color: String,
    /// Border stroke width; 0 disables the border.
    pub border_width: f32,
    /// Corner radius of the standard body.
    pub border_radius: f32,
    /// Frame style.
    pub style: PanelStyle,
    /// Title bar height for the `window` style.
    pub header_height: f32,
    /// Repeating background pattern.
    pub pattern: PanelPattern,
    /// Pattern opacity (0-1).
    pub pattern_opacity: f32,
    /// Whether an outer glow is drawn.
    pub glow: bool,
    /// Glow and tech-accent color (hex).
    pub glow_color: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 300,
            scale: 1.0,
            bg_color: "#0f172a".to_string(),
            bg_opacity: 0.95,
            border_color: "#3b82f6".to_string(),
            border_width: 2.0,
            border_radius: 8.0,
            style: PanelStyle::Window,
            header_height: 40.0,
            pattern: PanelPattern::Grid,
            pattern_opacity: 0.1,
            glow: true,
            glow_color: "#3b82f6".to_string(),
        }
    }
}

/// Panel frame style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelStyle {
    Solid,
    /// Main border plus a thin translucent inner trace.
    Double,
    Ridge,
    /// Octagonal body with fixed 20px corner cuts and corner accents.
    Tech,
    /// Title bar with a close control.
    Window,
    #[serde(other)]
    Unknown,
}

/// Repeating pattern painted inside the panel body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelPattern {
    None,
    Grid,
    Dots,
    Scanlines,
    /// Pixel grain at `pattern_opacity` strength.
    Noise,
    #[serde(other)]
    Unknown,
}
