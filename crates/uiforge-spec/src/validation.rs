//! Soft validation for element configurations.
//!
//! The renderer accepts any configuration and degrades visually, so nothing
//! here is fatal. Validation only reports values the control panel would
//! never produce, for tooling that loads configurations from disk.

use std::sync::OnceLock;

use regex::Regex;

use crate::element::{
    BadgeShape, BarDrawMode, BarShape, ButtonStyle, CrosshairType, ElementConfig, PanelPattern,
    PanelStyle, SliderDrawMode, SliderOrientation, SlotStyle, ThumbShape,
};
use crate::error::{ValidationWarning, WarningCode};

fn hex_color_regex() -> &'static Regex {
    static HEX: OnceLock<Regex> = OnceLock::new();
    HEX.get_or_init(|| Regex::new(r"^#?[0-9a-fA-F]{6}$").expect("valid hex color regex"))
}

/// Checks whether `value` is a 6-digit hex color, with or without `#`.
pub fn is_hex_color(value: &str) -> bool {
    hex_color_regex().is_match(value)
}

/// Collects warnings as a config is walked.
struct Checker {
    warnings: Vec<ValidationWarning>,
}

impl Checker {
    fn color(&mut self, field: &str, value: &str) {
        if !is_hex_color(value) {
            self.warnings.push(ValidationWarning::new(
                WarningCode::MalformedColor,
                field,
                format!("'{}' is not a 6-digit hex color; it will render as black", value),
            ));
        }
    }

    fn percent(&mut self, field: &str, value: f32) {
        if !(0.0..=100.0).contains(&value) {
            self.warnings.push(ValidationWarning::new(
                WarningCode::PercentOutOfRange,
                field,
                format!("{} is outside 0-100", value),
            ));
        }
    }

    fn fraction(&mut self, field: &str, value: f32) {
        if !(0.0..=1.0).contains(&value) {
            self.warnings.push(ValidationWarning::new(
                WarningCode::FractionOutOfRange,
                field,
                format!("{} is outside 0-1", value),
            ));
        }
    }

    fn base(&mut self, width: u32, height: u32, scale: f32) {
        if width == 0 || height == 0 {
            self.warnings.push(ValidationWarning::new(
                WarningCode::EmptyElement,
                if width == 0 { "width" } else { "height" },
                format!("element size {}x{} is empty", width, height),
            ));
        }
        if !(scale.is_finite() && scale > 0.0) {
            self.warnings.push(ValidationWarning::new(
                WarningCode::InvalidScale,
                "scale",
                format!("scale {} is not positive; rendering at 1x", scale),
            ));
        }
    }

    fn corner(&mut self, field: &str, value: f32, width: u32, height: u32) {
        let limit = width.min(height) as f32 / 2.0;
        if value > limit {
            self.warnings.push(ValidationWarning::new(
                WarningCode::OversizedCorner,
                field,
                format!(
                    "{} exceeds half the shorter side ({}); outline will self-intersect",
                    value, limit
                ),
            ));
        }
    }

    fn variant(&mut self, field: &str, unknown: bool) {
        if unknown {
            self.warnings.push(ValidationWarning::new(
                WarningCode::UnknownVariant,
                field,
                "unrecognized value; this feature will not be drawn",
            ));
        }
    }
}

/// Validates a configuration, returning every warning found.
///
/// An empty list means the configuration is within the ranges the control
/// panel enforces.
pub fn validate_config(config: &ElementConfig) -> Vec<ValidationWarning> {
    let mut c = Checker {
        warnings: Vec::new(),
    };
    c.base(config.width(), config.height(), config.scale());

    match config {
        ElementConfig::Button(cfg) => {
            c.color("bgColor", &cfg.bg_color);
            c.color("textColor", &cfg.text_color);
            c.color("borderColor", &cfg.border_color);
            c.color("shadowColor", &cfg.shadow_color);
            c.corner("borderRadius", cfg.border_radius, cfg.width, cfg.height);
            c.variant("style", cfg.style == ButtonStyle::Unknown);
        }
        ElementConfig::HealthBar(cfg) => {
            c.percent("value", cfg.value);
            c.fraction("noise", cfg.noise);
            c.color("bgColor", &cfg.bg_color);
            c.color("fillColorStart", &cfg.fill_color_start);
            c.color("fillColorEnd", &cfg.fill_color_end);
            c.color("borderColor", &cfg.border_color);
            if matches!(cfg.shape, BarShape::Round | BarShape::Chamfer) {
                c.corner("borderRadius", cfg.border_radius, cfg.width, cfg.height);
            }
            c.variant("shape", cfg.shape == BarShape::Unknown);
            c.variant("drawMode", cfg.draw_mode == BarDrawMode::Unknown);
        }
        ElementConfig::Panel(cfg) => {
            c.fraction("bgOpacity", cfg.bg_opacity);
            c.fraction("patternOpacity", cfg.pattern_opacity);
            c.color("bgColor", &cfg.bg_color);
            c.color("borderColor", &cfg.border_color);
            c.color("glowColor", &cfg.glow_color);
            c.variant("style", cfg.style == PanelStyle::Unknown);
            c.variant("pattern", cfg.pattern == PanelPattern::Unknown);
        }
        ElementConfig::Crosshair(cfg) => {
            c.color("color", &cfg.color);
            c.color("outlineColor", &cfg.outline_color);
            c.variant("type", cfg.kind == CrosshairType::Unknown);
        }
        ElementConfig::Slot(cfg) => {
            if let Some(rarity) = cfg.rarity() {
                c.color("rarityColor", rarity);
            }
            c.color("bgColor", &cfg.bg_color);
            c.color("borderColor", &cfg.border_color);
            c.corner("borderRadius", cfg.border_radius, cfg.width, cfg.height);
            c.variant("style", cfg.style == SlotStyle::Unknown);
        }
        ElementConfig::Badge(cfg) => {
            c.color("primaryColor", &cfg.primary_color);
            c.color("secondaryColor", &cfg.secondary_color);
            c.color("borderColor", &cfg.border_color);
            c.variant("shape", cfg.shape == BadgeShape::Unknown);
        }
        ElementConfig::Slider(cfg) => {
            c.percent("value", cfg.value);
            c.color("trackColor", &cfg.track_color);
            c.color("trackBorderColor", &cfg.track_border_color);
            c.color("fillColor", &cfg.fill_color);
            c.color("thumbColor", &cfg.thumb_color);
            c.color("thumbBorderColor", &cfg.thumb_border_color);
            c.variant("type", cfg.orientation == SliderOrientation::Unknown);
            c.variant("thumbShape", cfg.thumb_shape == ThumbShape::Unknown);
            c.variant("drawMode", cfg.draw_mode == SliderDrawMode::Unknown);
        }
    }

    c.warnings
}
