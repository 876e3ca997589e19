//! Defaults command implementation
//!
//! Prints the default configuration of one element kind as pretty JSON,
//! ready to be edited and passed back via `render --config`.

use anyhow::Result;
use std::process::ExitCode;
use std::str::FromStr;
use uiforge_spec::{ElementConfig, ElementKind};

/// Run the defaults command
pub fn run(kind: &str) -> Result<ExitCode> {
    println!("{}", defaults_json(kind)?);
    Ok(ExitCode::SUCCESS)
}

/// Pretty JSON of the default configuration for `kind`.
pub fn defaults_json(kind: &str) -> Result<String> {
    let kind = ElementKind::from_str(kind)?;
    Ok(ElementConfig::default_for(kind).to_json_pretty()?)
}
