//! Health bar configuration.

use serde::{Deserialize, Serialize};

/// Parameters for a health/progress bar element.
///
/// `draw_mode` splits the bar into separately exportable layers so game
/// engines can composite frame and fill textures at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct HealthBarConfig {
    /// Logical width in pixels.
    pub width: u32,
    /// Logical height in pixels.
    pub height: u32,
    /// Output scale factor.
    pub scale: f32,

    /// Fill percentage (0-100).
    pub value: f32,
    /// Frame background color (hex).
    pub bg_color: String,
    /// Fill gradient start color, at the left edge (hex).
    pub fill_color_start: String,
    /// Fill gradient end color, at the right edge (hex).
    pub fill_color_end: String,
    /// Border color (hex).
    pub border_color: String,
    /// Border stroke width; 0 disables the border.
    pub border_width: f32,
    /// Corner parameter passed to the shape path.
    pub border_radius: f32,
    /// Number of fill segments; 0 draws a continuous fill.
    pub segments: u32,
    /// Gap between segments in pixels.
    pub segment_gap: f32,
    /// Whether the percentage label is drawn.
    pub show_text: bool,
    /// Outline shape.
    pub shape: BarShape,
    /// Which layers are painted.
    pub draw_mode: BarDrawMode,
    /// Pixel noise amount (0-1, practically 0-0.5).
    pub noise: f32,
}

impl Default for HealthBarConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 32,
            scale: 1.0,
            value: 100.0,
            bg_color: "#1e293b".to_string(),
            fill_color_start: "#22c55e".to_string(),
            fill_color_end: "#15803d".to_string(),
            border_color: "#0f172a".to_string(),
            border_width: 4.0,
            border_radius: 2.0,
            segments: 10,
            segment_gap: 4.0,
            show_text: false,
            shape: BarShape::Slash,
            draw_mode: BarDrawMode::Full,
            noise: 0.0,
        }
    }
}

/// Outline treatment shared by the path builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarShape {
    /// Axis-aligned rectangle.
    Rect,
    /// Rectangle with curved corners.
    Round,
    /// Rectangle with straight corner cuts.
    Chamfer,
    /// Parallelogram skewed by 40% of the height.
    Slash,
    #[serde(other)]
    Unknown,
}

/// Layer selection for partitioned export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarDrawMode {
    /// Background, fill, border and label.
    Full,
    /// Background, border and label only.
    Frame,
    /// Fill only.
    Fill,
    #[serde(other)]
    Unknown,
}

impl BarDrawMode {
    /// Returns the mode as its wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            BarDrawMode::Full => "full",
            BarDrawMode::Frame => "frame",
            BarDrawMode::Fill => "fill",
            BarDrawMode::Unknown => "unknown",
        }
    }

    /// Whether background, border and label are painted.
    pub fn paints_frame(&self) -> bool {
        !matches!(self, BarDrawMode::Fill)
    }

    /// Whether the fill layer is painted.
    pub fn paints_fill(&self) -> bool {
        !matches!(self, BarDrawMode::Frame)
    }
}
