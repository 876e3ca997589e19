//! UI Forge Configuration Library
//!
//! This crate provides the configuration model for UI Forge, a parametric
//! generator for game-UI textures (buttons, health bars, panels, crosshairs,
//! inventory slots, badges and sliders).
//!
//! # Overview
//!
//! - **Element configs**: one parameter struct per element kind, with the
//!   documented defaults, wrapped in the [`ElementConfig`] tagged union
//! - **Editor state**: [`ForgeState`], the explicitly owned context that the
//!   control panel updates one field at a time
//! - **Validation**: soft, non-fatal range and color checks
//! - **Export naming**: `<kind>_<drawMode>_<epochMillis>.png`
//!
//! # Example
//!
//! ```
//! use uiforge_spec::{ElementKind, ForgeState};
//!
//! let mut state = ForgeState::new();
//! state.set_active(ElementKind::HealthBar);
//! state.set_field_raw("value", "35").unwrap();
//! state.set_field_raw("drawMode", "frame").unwrap();
//!
//! let config = state.active_config();
//! assert_eq!(config.draw_mode_label(), "frame");
//! assert_eq!(config.export_file_name(1_700_000_000_000), "healthbar_frame_1700000000000.png");
//! ```

pub mod element;
pub mod error;
pub mod export;
pub mod kind;
pub mod state;
pub mod validation;

// Re-export commonly used types at the crate root
pub use element::{
    BadgeConfig, BadgeShape, BarDrawMode, BarShape, ButtonConfig, ButtonStyle, CrosshairConfig,
    CrosshairType, ElementConfig, FontFamily, FontWeight, HealthBarConfig, PanelConfig,
    PanelPattern, PanelStyle, SliderConfig, SliderDrawMode, SliderOrientation, SlotConfig,
    SlotStyle, ThumbShape, DEFAULT_DRAW_MODE, NO_RARITY,
};
pub use error::{ConfigError, ValidationWarning, WarningCode};
pub use export::export_file_name;
pub use kind::ElementKind;
pub use state::ForgeState;
pub use validation::{is_hex_color, validate_config};
