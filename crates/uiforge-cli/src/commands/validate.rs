//! Validate command implementation
//!
//! Loads an element config file and reports soft range/color warnings.
//! Warnings never stop a render; this command exists so asset pipelines can
//! catch them before export.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use uiforge_spec::validate_config;

use super::json_output::{input_error_to_json, JsonWarning, ValidateOutput};
use crate::input::load_config;

/// Run the validate command
///
/// # Returns
/// Exit code: 0 if the config is clean, 1 if it failed to load or has warnings
pub fn run(file: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(file)
    } else {
        run_human(file)
    }
}

fn run_human(file: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), file);

    let config = load_config(Path::new(file))
        .with_context(|| format!("Failed to load config file: {}", file))?;
    println!("{} {}", "Kind:".dimmed(), config.kind());

    let warnings = validate_config(&config);
    for warning in &warnings {
        println!(
            "  {} [{}] {}: {}",
            "!".yellow(),
            warning.code,
            warning.field.dimmed(),
            warning.message
        );
    }

    if warnings.is_empty() {
        println!("{}", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} {} warning(s)",
            "WARNINGS".yellow().bold(),
            warnings.len()
        );
        Ok(ExitCode::from(1))
    }
}

fn run_json(file: &str) -> Result<ExitCode> {
    let output = match load_config(Path::new(file)) {
        Ok(config) => {
            let warnings: Vec<JsonWarning> = validate_config(&config)
                .iter()
                .map(JsonWarning::from)
                .collect();
            ValidateOutput {
                success: warnings.is_empty(),
                errors: Vec::new(),
                warnings,
                kind: Some(config.kind().to_string()),
            }
        }
        Err(e) => ValidateOutput {
            success: false,
            errors: vec![input_error_to_json(&e, Some(file))],
            warnings: Vec::new(),
            kind: None,
        },
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
