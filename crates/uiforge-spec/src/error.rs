//! Error types for configuration loading and field updates.

use thiserror::Error;

use crate::kind::ElementKind;

/// Errors raised while building or updating element configurations.
///
/// Rendering never produces these; they only surface at the editing layer
/// (field updates from the control panel, config files on disk).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The field is not declared on the active element variant.
    #[error("unknown field '{field}' for element '{kind}'")]
    UnknownField {
        /// Element kind the update was aimed at.
        kind: ElementKind,
        /// Offending field name.
        field: String,
    },

    /// The value could not be stored in the named field.
    #[error("invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Deserializer message.
        message: String,
    },

    /// The element kind string is not one of the seven known kinds.
    #[error("unknown element kind '{0}' (expected one of: button, healthbar, panel, crosshair, slot, badge, slider)")]
    UnknownKind(String),

    /// JSON parse or serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Warning codes for soft configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W101: Color is not a 6-digit hex string (renders as black)
    MalformedColor,
    /// W102: Percentage outside 0-100
    PercentOutOfRange,
    /// W103: Fraction (opacity, noise) outside 0-1
    FractionOutOfRange,
    /// W104: Zero width or height
    EmptyElement,
    /// W105: Scale is not a positive finite number (renders at 1x)
    InvalidScale,
    /// W106: Corner parameter exceeds half the shorter side
    OversizedCorner,
    /// W107: Enum value not recognized (feature renders as a no-op)
    UnknownVariant,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W101").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::MalformedColor => "W101",
            WarningCode::PercentOutOfRange => "W102",
            WarningCode::FractionOutOfRange => "W103",
            WarningCode::EmptyElement => "W104",
            WarningCode::InvalidScale => "W105",
            WarningCode::OversizedCorner => "W106",
            WarningCode::UnknownVariant => "W107",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation warning with code, message, and the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// Field name in control-panel spelling (e.g. `bgColor`).
    pub field: String,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field: field.into(),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} (at {})", self.code, self.message, self.field)
    }
}
