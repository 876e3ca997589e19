//! Button configuration.

use serde::{Deserialize, Serialize};

/// Parameters for a button element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ButtonConfig {
    /// Logical width in pixels.
    pub width: u32,
    /// Logical height in pixels.
    pub height: u32,
    /// Output scale factor.
    pub scale: f32,

    /// Label text.
    pub text: String,
    /// Whether the label is drawn.
    pub show_text: bool,
    /// Label typeface.
    pub font_family: FontFamily,
    /// Label size in pixels.
    pub font_size: f32,
    /// Label weight.
    pub font_weight: FontWeight,

    /// Body fill color (hex).
    pub bg_color: String,
    /// Label color (hex).
    pub text_color: String,
    /// Border color (hex).
    pub border_color: String,
    /// Border stroke width; 0 disables the border.
    pub border_width: f32,
    /// Corner radius for rounded styles, chamfer length for `cyber`.
    pub border_radius: f32,

    /// Fill treatment.
    pub style: ButtonStyle,
    /// Drop shadow color (hex).
    pub shadow_color: String,
    /// Drop shadow blur; 0 disables the shadow.
    pub shadow_blur: f32,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 60,
            scale: 1.0,
            text: "START".to_string(),
            show_text: true,
            font_family: FontFamily::Pixel,
            font_size: 24.0,
            font_weight: FontWeight::Bold,
            bg_color: "#3b82f6".to_string(),
            text_color: "#ffffff".to_string(),
            border_color: "#1e3a8a".to_string(),
            border_width: 4.0,
            border_radius: 4.0,
            style: ButtonStyle::Glossy,
            shadow_color: "#000000".to_string(),
            shadow_blur: 0.0,
        }
    }
}

/// Button fill treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Flat,
    Glossy,
    Cyber,
    Pixel,
    Neomorphism,
    #[serde(other)]
    Unknown,
}

/// Label typeface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    Sans,
    Pixel,
    #[serde(other)]
    Unknown,
}

/// Label weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
    #[serde(other)]
    Unknown,
}
