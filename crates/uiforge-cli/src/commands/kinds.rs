//! Kinds command implementation

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;
use uiforge_spec::{ElementConfig, ElementKind};

use super::json_output::{KindEntry, KindsOutput};

/// Run the kinds command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let output = KindsOutput { kinds: entries() };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", "Element kinds:".cyan().bold());
        for entry in &output.kinds {
            println!(
                "  {:<10} {}",
                entry.kind.bold(),
                format!("{}x{}", entry.width, entry.height).dimmed()
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Every kind with its default logical size, in control-panel order.
pub fn entries() -> Vec<KindEntry> {
    ElementKind::ALL
        .iter()
        .map(|&kind| {
            let config = ElementConfig::default_for(kind);
            KindEntry {
                kind: kind.as_str().to_string(),
                width: config.width(),
                height: config.height(),
            }
        })
        .collect()
}
