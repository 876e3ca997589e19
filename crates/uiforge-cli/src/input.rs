//! Loading element configurations from disk and parsing `--set` assignments.
//!
//! Config files are JSON objects tagged with a `kind` field, e.g.
//! `{"kind": "healthbar", "value": 35, ...}`. Missing fields take the
//! element's defaults.

use std::path::{Path, PathBuf};

use uiforge_spec::ElementConfig;

/// Recognized JSON extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Errors that can occur while reading CLI input.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Unknown file extension.
    UnknownExtension { extension: Option<String> },

    /// The file is not a valid element configuration.
    Parse { message: String },

    /// A `--set` argument is not of the form `name=value`.
    InvalidAssignment { raw: String },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::UnknownExtension { extension } => match extension {
                Some(ext) => write!(f, "unknown file extension '.{}' (expected .json)", ext),
                None => write!(f, "file has no extension (expected .json)"),
            },
            InputError::Parse { message } => {
                write!(f, "invalid element config: {}", message)
            }
            InputError::InvalidAssignment { raw } => {
                write!(f, "invalid assignment '{}' (expected name=value)", raw)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Load an element configuration from a file path, dispatching by extension.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use uiforge_cli::input::load_config;
///
/// let config = load_config(Path::new("healthbar.json")).unwrap();
/// println!("Loaded {} config", config.kind());
/// ```
pub fn load_config(path: &Path) -> Result<ElementConfig, InputError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());

    match extension.as_deref() {
        Some(ext) if JSON_EXTENSIONS.contains(&ext) => load_json_config(path),
        _ => Err(InputError::UnknownExtension { extension }),
    }
}

fn load_json_config(path: &Path) -> Result<ElementConfig, InputError> {
    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config(&content)
}

/// Parse an element configuration from JSON text.
pub fn parse_config(json: &str) -> Result<ElementConfig, InputError> {
    ElementConfig::from_json(json).map_err(|e| InputError::Parse {
        message: e.to_string(),
    })
}

/// Split a `name=value` assignment. The value may itself contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(&str, &str), InputError> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value)),
        _ => Err(InputError::InvalidAssignment {
            raw: raw.to_string(),
        }),
    }
}
