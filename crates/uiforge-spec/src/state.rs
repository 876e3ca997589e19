//! Explicitly owned editor state.
//!
//! [`ForgeState`] holds one configuration per element kind and remembers
//! which one is active. The control panel mutates it one field at a time;
//! the renderer only ever receives a by-value snapshot of the active variant.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::element::{
    BadgeConfig, ButtonConfig, CrosshairConfig, ElementConfig, HealthBarConfig, PanelConfig,
    SliderConfig, SlotConfig,
};
use crate::error::ConfigError;
use crate::kind::ElementKind;

/// Fields that are not exposed through field updates. Of the shared base,
/// only `width` and `height` are editable.
const LOCKED_FIELDS: [&str; 2] = ["kind", "scale"];

/// Editor state: the active element kind and every kind's parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForgeState {
    /// Kind currently shown and rendered.
    pub active: ElementKind,
    pub button: ButtonConfig,
    pub healthbar: HealthBarConfig,
    pub panel: PanelConfig,
    pub crosshair: CrosshairConfig,
    pub slot: SlotConfig,
    pub badge: BadgeConfig,
    pub slider: SliderConfig,
}

impl Default for ForgeState {
    fn default() -> Self {
        Self {
            active: ElementKind::HealthBar,
            button: ButtonConfig::default(),
            healthbar: HealthBarConfig::default(),
            panel: PanelConfig::default(),
            crosshair: CrosshairConfig::default(),
            slot: SlotConfig::default(),
            badge: BadgeConfig::default(),
            slider: SliderConfig::default(),
        }
    }
}

impl ForgeState {
    /// Creates the initial state with every kind at its defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the active kind.
    pub fn active(&self) -> ElementKind {
        self.active
    }

    /// Switches the active kind. Other kinds keep their parameters.
    pub fn set_active(&mut self, kind: ElementKind) {
        self.active = kind;
    }

    /// Snapshot of the active configuration.
    pub fn active_config(&self) -> ElementConfig {
        self.config_for(self.active)
    }

    /// Snapshot of the configuration stored for `kind`.
    pub fn config_for(&self, kind: ElementKind) -> ElementConfig {
        match kind {
            ElementKind::Button => ElementConfig::Button(self.button.clone()),
            ElementKind::HealthBar => ElementConfig::HealthBar(self.healthbar.clone()),
            ElementKind::Panel => ElementConfig::Panel(self.panel.clone()),
            ElementKind::Crosshair => ElementConfig::Crosshair(self.crosshair.clone()),
            ElementKind::Slot => ElementConfig::Slot(self.slot.clone()),
            ElementKind::Badge => ElementConfig::Badge(self.badge.clone()),
            ElementKind::Slider => ElementConfig::Slider(self.slider.clone()),
        }
    }

    /// Stores a whole configuration and makes its kind active.
    pub fn replace(&mut self, config: ElementConfig) {
        self.active = config.kind();
        match config {
            ElementConfig::Button(cfg) => self.button = cfg,
            ElementConfig::HealthBar(cfg) => self.healthbar = cfg,
            ElementConfig::Panel(cfg) => self.panel = cfg,
            ElementConfig::Crosshair(cfg) => self.crosshair = cfg,
            ElementConfig::Slot(cfg) => self.slot = cfg,
            ElementConfig::Badge(cfg) => self.badge = cfg,
            ElementConfig::Slider(cfg) => self.slider = cfg,
        }
    }

    /// Sets one field of the active configuration.
    ///
    /// Accepts any field declared on the active variant plus the shared
    /// `width`/`height`. The state is left untouched when the field is
    /// unknown or the value does not fit its type.
    pub fn set_field(&mut self, field: &str, value: Value) -> Result<(), ConfigError> {
        let kind = self.active;
        let mut json = serde_json::to_value(self.active_config())?;
        let map = json
            .as_object_mut()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: field.to_string(),
                message: "configuration is not an object".to_string(),
            })?;

        if !map.contains_key(field) || LOCKED_FIELDS.contains(&field) {
            return Err(ConfigError::UnknownField {
                kind,
                field: field.to_string(),
            });
        }

        map.insert(field.to_string(), value);
        let updated: ElementConfig =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                field: field.to_string(),
                message: e.to_string(),
            })?;

        self.replace(updated);
        Ok(())
    }

    /// Sets one field from raw text.
    ///
    /// The text is read as a JSON literal (`42`, `true`, `"x"`); anything
    /// that is not valid JSON, or that only fits the field as a string, is
    /// stored as a plain string. Handy for `#rrggbb` colors and labels.
    pub fn set_field_raw(&mut self, field: &str, raw: &str) -> Result<(), ConfigError> {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::String(s)) => self.set_field(field, Value::String(s)),
            Ok(parsed) => match self.set_field(field, parsed) {
                Err(first @ ConfigError::InvalidValue { .. }) => self
                    .set_field(field, Value::String(raw.to_string()))
                    .map_err(|_| first),
                other => other,
            },
            Err(_) => self.set_field(field, Value::String(raw.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{BarDrawMode, ButtonStyle};
    use serde_json::json;

    #[test]
    fn test_initial_state_is_healthbar() {
        let state = ForgeState::new();
        assert_eq!(state.active(), ElementKind::HealthBar);
        assert_eq!(state.active_config().kind(), ElementKind::HealthBar);
    }

    #[test]
    fn test_set_field_updates_active_variant_only() {
        let mut state = ForgeState::new();
        state.set_active(ElementKind::Button);
        state.set_field("style", json!("cyber")).unwrap();
        state.set_field("width", json!(320)).unwrap();

        assert_eq!(state.button.style, ButtonStyle::Cyber);
        assert_eq!(state.button.width, 320);
        assert_eq!(state.healthbar.width, 300);
    }

    #[test]
    fn test_switching_kind_preserves_parameters() {
        let mut state = ForgeState::new();
        state.set_field("value", json!(25)).unwrap();
        state.set_active(ElementKind::Slider);
        state.set_field("value", json!(80)).unwrap();
        state.set_active(ElementKind::HealthBar);

        assert_eq!(state.healthbar.value, 25.0);
        assert_eq!(state.slider.value, 80.0);
    }

    #[test]
    fn test_unknown_field_leaves_state_untouched() {
        let mut state = ForgeState::new();
        let before = state.clone();

        let err = state.set_field("thumbSize", json!(30)).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownField { .. }));
        assert_eq!(state, before);
    }

    #[test]
    fn test_locked_fields_are_rejected() {
        let mut state = ForgeState::new();
        assert!(matches!(
            state.set_field("kind", json!("badge")),
            Err(ConfigError::UnknownField { .. })
        ));
        assert!(matches!(
            state.set_field("scale", json!(2.0)),
            Err(ConfigError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_ill_typed_value_is_rejected() {
        let mut state = ForgeState::new();
        let before = state.clone();

        let err = state.set_field("segments", json!(-3)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert_eq!(state, before);
    }

    #[test]
    fn test_set_field_raw_parses_literals_and_strings() {
        let mut state = ForgeState::new();
        state.set_field_raw("value", "42.5").unwrap();
        state.set_field_raw("showText", "true").unwrap();
        state.set_field_raw("bgColor", "#112233").unwrap();
        state.set_field_raw("drawMode", "fill").unwrap();

        assert_eq!(state.healthbar.value, 42.5);
        assert!(state.healthbar.show_text);
        assert_eq!(state.healthbar.bg_color, "#112233");
        assert_eq!(state.healthbar.draw_mode, BarDrawMode::Fill);
    }

    #[test]
    fn test_set_field_raw_numeric_text_for_string_field() {
        let mut state = ForgeState::new();
        state.set_active(ElementKind::Slot);
        state.set_field_raw("hotkeyText", "1").unwrap();
        assert_eq!(state.slot.hotkey_text, "1");
    }

    #[test]
    fn test_replace_activates_kind() {
        let mut state = ForgeState::new();
        state.replace(ElementConfig::default_for(ElementKind::Crosshair));
        assert_eq!(state.active(), ElementKind::Crosshair);
    }
}
