//! Slider configuration.

use serde::{Deserialize, Serialize};

/// Parameters for a slider element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct SliderConfig {
    /// Logical width in pixels.
    pub width: u32,
    /// Logical height in pixels.
    pub height: u32,
    /// Output scale factor.
    pub scale: f32,

    /// Preview position (0-100).
    pub value: f32,
    /// Orientation.
    #[serde(rename = "type")]
    pub orientation: SliderOrientation,
    /// Track color (hex).
    pub track_color: String,
    /// Track border color (hex).
    pub track_border_color: String,
    /// Track border width; 0 disables the border.
    pub track_border_width: f32,
    /// Track corner radius.
    pub track_radius: f32,
    /// Progress fill color (hex).
    pub fill_color: String,
    /// Thumb color (hex).
    pub thumb_color: String,
    /// Thumb border color (hex).
    pub thumb_border_color: String,
    /// Thumb border width; 0 disables the border.
    pub thumb_border_width: f32,
    /// Thumb diameter or side length.
    pub thumb_size: f32,
    /// Thumb outline.
    pub thumb_shape: ThumbShape,
    /// Which passes are painted.
    pub draw_mode: SliderDrawMode,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 40,
            scale: 1.0,
            value: 50.0,
            orientation: SliderOrientation::Horizontal,
            track_color: "#1e293b".to_string(),
            track_border_color: "#475569".to_string(),
            track_border_width: 2.0,
            track_radius: 10.0,
            fill_color: "#3b82f6".to_string(),
            thumb_color: "#ffffff".to_string(),
            thumb_border_color: "#94a3b8".to_string(),
            thumb_border_width: 1.0,
            thumb_size: 24.0,
            thumb_shape: ThumbShape::Circle,
            draw_mode: SliderDrawMode::Combined,
        }
    }
}

/// Slider orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliderOrientation {
    Horizontal,
    Vertical,
    #[serde(other)]
    Unknown,
}

/// Thumb outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbShape {
    Circle,
    Rect,
    /// Simplified pill, drawn as a half-width rectangle.
    Pill,
    Diamond,
    #[serde(other)]
    Unknown,
}

/// Pass selection for partitioned export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliderDrawMode {
    /// Track, fill and thumb.
    Combined,
    /// Track and fill only.
    Track,
    /// Thumb only, centered on the canvas.
    Thumb,
    #[serde(other)]
    Unknown,
}

impl SliderDrawMode {
    /// Returns the mode as its wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            SliderDrawMode::Combined => "combined",
            SliderDrawMode::Track => "track",
            SliderDrawMode::Thumb => "thumb",
            SliderDrawMode::Unknown => "unknown",
        }
    }

    /// Whether the track and fill pass runs.
    pub fn paints_track(&self) -> bool {
        !matches!(self, SliderDrawMode::Thumb)
    }

    /// Whether the thumb pass runs.
    pub fn paints_thumb(&self) -> bool {
        !matches!(self, SliderDrawMode::Track)
    }
}
