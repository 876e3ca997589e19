//! JSON output types for the `--json` flag.
//!
//! These shapes are stable so scripts can drive the CLI and read its
//! results without scraping colored text.

use serde::{Deserialize, Serialize};
use uiforge_spec::ValidationWarning;

use crate::input::InputError;

/// Error codes for CLI operations.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Unknown file extension
    pub const UNKNOWN_EXTENSION: &str = "CLI_002";
    /// Config file is not a valid element configuration
    pub const CONFIG_PARSE: &str = "CLI_003";
    /// Malformed `--set` argument
    pub const INVALID_ASSIGNMENT: &str = "CLI_004";
    /// Field update or kind selection rejected
    pub const CONFIG_UPDATE: &str = "CLI_005";
    /// Surface allocation failed
    pub const SURFACE_UNAVAILABLE: &str = "CLI_006";
    /// PNG encoding or file write failed
    pub const OUTPUT_WRITE: &str = "CLI_007";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W101")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// Field the warning is about, in config-file spelling
    pub field: String,
}

impl From<&ValidationWarning> for JsonWarning {
    fn from(warning: &ValidationWarning) -> Self {
        Self {
            code: warning.code.code().to_string(),
            message: warning.message.clone(),
            field: warning.field.clone(),
        }
    }
}

/// Converts an input error into a JSON error.
pub fn input_error_to_json(err: &InputError, file: Option<&str>) -> JsonError {
    let code = match err {
        InputError::FileRead { .. } => error_codes::FILE_READ,
        InputError::UnknownExtension { .. } => error_codes::UNKNOWN_EXTENSION,
        InputError::Parse { .. } => error_codes::CONFIG_PARSE,
        InputError::InvalidAssignment { .. } => error_codes::INVALID_ASSIGNMENT,
    };
    let error = JsonError::new(code, err.to_string());
    match file {
        Some(f) => error.with_file(f),
        None => error,
    }
}

/// JSON output for the `render` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOutput {
    /// Whether a PNG was written
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RenderResult>,
}

/// Details of a successful render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderResult {
    /// Element kind identifier
    pub kind: String,
    /// Draw mode used in the file name
    pub draw_mode: String,
    /// Path of the written PNG
    pub path: String,
    /// Device width in pixels
    pub width: u32,
    /// Device height in pixels
    pub height: u32,
    /// BLAKE3 hash of the PNG bytes
    pub hash: String,
}

impl RenderOutput {
    pub fn success(result: RenderResult, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
        }
    }

    pub fn failure(errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
        }
    }
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// True when the config loaded and produced no warnings
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    /// Element kind of the loaded config
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// JSON output for the `kinds` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KindsOutput {
    pub kinds: Vec<KindEntry>,
}

/// One element kind with its default logical size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KindEntry {
    pub kind: String,
    pub width: u32,
    pub height: u32,
}
