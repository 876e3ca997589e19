//! Color utilities: hex decoding and RGBA composition.
//!
//! Configuration colors are 6-digit hex strings. Decoding never fails;
//! anything that is not `#rrggbb` / `rrggbb` resolves to black.

use tiny_skia::Color;

/// 8-bit RGB triple decoded from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    /// Create from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque color.
    pub fn opaque(self) -> Color {
        Color::from_rgba8(self.r, self.g, self.b, 255)
    }

    /// Color with the given alpha, clamped to [0, 1].
    pub fn with_alpha(self, alpha: f32) -> Color {
        Color::from_rgba8(self.r, self.g, self.b, alpha_to_u8(alpha))
    }
}

/// Decode a 6-digit hex color, with or without a leading `#`.
///
/// Malformed input yields black `(0, 0, 0)`.
pub fn hex_to_rgb(hex: &str) -> Rgb8 {
    parse_hex(hex).unwrap_or_default()
}

fn parse_hex(hex: &str) -> Option<Rgb8> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb8::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Opaque color from a hex string.
pub fn hex(hex: &str) -> Color {
    hex_to_rgb(hex).opaque()
}

/// Color from a hex string at the given opacity.
pub fn hex_alpha(hex: &str, alpha: f32) -> Color {
    hex_to_rgb(hex).with_alpha(alpha)
}

/// Color from 8-bit channels and a fractional alpha, like CSS `rgba()`.
pub fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Color {
    Color::from_rgba8(r, g, b, alpha_to_u8(alpha))
}

fn alpha_to_u8(alpha: f32) -> u8 {
    if !alpha.is_finite() {
        return 0;
    }
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Opaque black.
pub fn black() -> Color {
    Color::from_rgba8(0, 0, 0, 255)
}

/// Opaque white.
pub fn white() -> Color {
    Color::from_rgba8(255, 255, 255, 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_white() {
        assert_eq!(hex_to_rgb("#ffffff"), Rgb8::new(255, 255, 255));
    }

    #[test]
    fn test_hex_without_hash() {
        assert_eq!(hex_to_rgb("3b82F6"), Rgb8::new(0x3b, 0x82, 0xf6));
    }

    #[test]
    fn test_malformed_hex_is_black() {
        assert_eq!(hex_to_rgb("notacolor"), Rgb8::new(0, 0, 0));
        assert_eq!(hex_to_rgb("#fff"), Rgb8::new(0, 0, 0));
        assert_eq!(hex_to_rgb("#gg0000"), Rgb8::new(0, 0, 0));
        assert_eq!(hex_to_rgb(""), Rgb8::new(0, 0, 0));
        // Multi-byte input must not panic on slicing
        assert_eq!(hex_to_rgb("#ééé"), Rgb8::new(0, 0, 0));
    }

    #[test]
    fn test_alpha_is_clamped() {
        assert_eq!(hex_alpha("#ff0000", 2.0).to_color_u8().alpha(), 255);
        assert_eq!(hex_alpha("#ff0000", -1.0).to_color_u8().alpha(), 0);
        assert_eq!(hex_alpha("#ff0000", f32::NAN).to_color_u8().alpha(), 0);
    }

    #[test]
    fn test_rgba_composition() {
        let c = rgba(255, 255, 255, 0.5).to_color_u8();
        assert_eq!((c.red(), c.green(), c.blue(), c.alpha()), (255, 255, 255, 128));
    }
}
