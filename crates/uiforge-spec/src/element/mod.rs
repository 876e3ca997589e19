//! Element configuration variants.
//!
//! Each element kind has its own parameter struct. All of them share the
//! base `width`, `height` and `scale` fields; the rest is variant-specific.
//! [`ElementConfig`] is the tagged union handed to the renderer, one variant
//! at a time.

mod badge;
mod button;
mod crosshair;
mod healthbar;
mod panel;
mod slider;
mod slot;

pub use badge::*;
pub use button::*;
pub use crosshair::*;
pub use healthbar::*;
pub use panel::*;
pub use slider::*;
pub use slot::*;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::export::export_file_name;
use crate::kind::ElementKind;

/// Draw mode label used for elements without partitioned export.
pub const DEFAULT_DRAW_MODE: &str = "full";

/// A fully materialized configuration for exactly one element kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ElementConfig {
    Button(ButtonConfig),
    HealthBar(HealthBarConfig),
    Panel(PanelConfig),
    Crosshair(CrosshairConfig),
    Slot(SlotConfig),
    Badge(BadgeConfig),
    Slider(SliderConfig),
}

macro_rules! each_variant {
    ($value:expr, $cfg:ident => $body:expr) => {
        match $value {
            ElementConfig::Button($cfg) => $body,
            ElementConfig::HealthBar($cfg) => $body,
            ElementConfig::Panel($cfg) => $body,
            ElementConfig::Crosshair($cfg) => $body,
            ElementConfig::Slot($cfg) => $body,
            ElementConfig::Badge($cfg) => $body,
            ElementConfig::Slider($cfg) => $body,
        }
    };
}

impl ElementConfig {
    /// Creates the documented default configuration for a kind.
    pub fn default_for(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Button => ElementConfig::Button(ButtonConfig::default()),
            ElementKind::HealthBar => ElementConfig::HealthBar(HealthBarConfig::default()),
            ElementKind::Panel => ElementConfig::Panel(PanelConfig::default()),
            ElementKind::Crosshair => ElementConfig::Crosshair(CrosshairConfig::default()),
            ElementKind::Slot => ElementConfig::Slot(SlotConfig::default()),
            ElementKind::Badge => ElementConfig::Badge(BadgeConfig::default()),
            ElementKind::Slider => ElementConfig::Slider(SliderConfig::default()),
        }
    }

    /// Returns the element kind discriminant.
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementConfig::Button(_) => ElementKind::Button,
            ElementConfig::HealthBar(_) => ElementKind::HealthBar,
            ElementConfig::Panel(_) => ElementKind::Panel,
            ElementConfig::Crosshair(_) => ElementKind::Crosshair,
            ElementConfig::Slot(_) => ElementKind::Slot,
            ElementConfig::Badge(_) => ElementKind::Badge,
            ElementConfig::Slider(_) => ElementKind::Slider,
        }
    }

    /// Logical width in pixels.
    pub fn width(&self) -> u32 {
        each_variant!(self, cfg => cfg.width)
    }

    /// Logical height in pixels.
    pub fn height(&self) -> u32 {
        each_variant!(self, cfg => cfg.height)
    }

    /// Output scale factor as configured (not sanitized).
    pub fn scale(&self) -> f32 {
        each_variant!(self, cfg => cfg.scale)
    }

    /// Overrides the output scale factor.
    pub fn set_scale(&mut self, scale: f32) {
        each_variant!(self, cfg => cfg.scale = scale)
    }

    /// Draw mode label for export naming; `full` when the kind has none.
    pub fn draw_mode_label(&self) -> &'static str {
        match self {
            ElementConfig::HealthBar(cfg) => cfg.draw_mode.as_str(),
            ElementConfig::Slider(cfg) => cfg.draw_mode.as_str(),
            _ => DEFAULT_DRAW_MODE,
        }
    }

    /// Export file name `<kind>_<drawMode>_<epochMillis>.png`.
    pub fn export_file_name(&self, epoch_millis: i64) -> String {
        export_file_name(self.kind(), self.draw_mode_label(), epoch_millis)
    }

    /// Parses a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
