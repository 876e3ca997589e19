//! Badge configuration.

use serde::{Deserialize, Serialize};

/// Parameters for a rank/achievement badge element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct BadgeConfig {
    /// Logical width in pixels.
    pub width: u32,
    /// Logical height in pixels.
    pub height: u32,
    /// Output scale factor.
    pub scale: f32,

    /// Outline shape.
    pub shape: BadgeShape,
    /// Gradient top color (hex).
    pub primary_color: String,
    /// Gradient bottom color (hex).
    pub secondary_color: String,
    /// Centered label.
    pub icon_text: String,
    /// Border color (hex).
    pub border_color: String,
    /// Border stroke width; 0 disables the border.
    pub border_width: f32,
    /// Whether the ribbon banner is drawn.
    pub ribbon: bool,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            scale: 1.0,
            shape: BadgeShape::Shield,
            primary_color: "#ef4444".to_string(),
            secondary_color: "#991b1b".to_string(),
            icon_text: "10".to_string(),
            border_color: "#fbbf24".to_string(),
            border_width: 4.0,
            ribbon: true,
        }
    }
}

/// Badge outline shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeShape {
    Shield,
    Circle,
    Hexagon,
    Diamond,
    /// Five-point star.
    Star,
    #[serde(other)]
    Unknown,
}
