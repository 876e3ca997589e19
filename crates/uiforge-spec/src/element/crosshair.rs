//! Crosshair configuration.

use serde::{Deserialize, Serialize};

/// Parameters for a crosshair/reticle element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct CrosshairConfig {
    /// Logical width in pixels.
    pub width: u32,
    /// Logical height in pixels.
    pub height: u32,
    /// Output scale factor.
    pub scale: f32,

    /// Reticle layout.
    #[serde(rename = "type")]
    pub kind: CrosshairType,
    /// Main color (hex).
    pub color: String,
    /// Line thickness.
    pub thickness: f32,
    /// Distance from the center to the start of each arm.
    pub gap: f32,
    /// Arm length.
    pub length: f32,
    /// Center dot radius; any positive value draws the dot for every layout.
    pub dot_size: f32,
    /// Outline color (hex).
    pub outline_color: String,
    /// Outline width on each side of a line; 0 disables outlines.
    pub outline_width: f32,
    /// Whether a soft drop shadow is drawn.
    pub shadow: bool,
}

impl Default for CrosshairConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            scale: 1.0,
            kind: CrosshairType::Cross,
            color: "#00ff00".to_string(),
            thickness: 2.0,
            gap: 4.0,
            length: 8.0,
            dot_size: 2.0,
            outline_color: "#000000".to_string(),
            outline_width: 1.0,
            shadow: true,
        }
    }
}

/// Crosshair layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrosshairType {
    Cross,
    Dot,
    Circle,
    /// Cross without the top arm.
    TShape,
    Chevron,
    Sniper,
    #[serde(other)]
    Unknown,
}
