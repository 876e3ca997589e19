//! UI Forge CLI - render parametric game-UI elements to PNG
//!
//! This binary stands in for the interactive control panel: it assembles an
//! element configuration from defaults, files and field assignments, then
//! renders and exports it.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use uiforge_cli::commands;
use uiforge_cli::commands::render::RenderArgs;
use uiforge_cli::logging::{init_logging, LoggingConfig};

/// UI Forge - Parametric Game-UI Texture Generator
#[derive(Parser)]
#[command(name = "uiforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an element to `<kind>_<drawMode>_<epochMillis>.png`
    Render {
        /// Element kind (button, healthbar, panel, crosshair, slot, badge, slider)
        #[arg(short, long)]
        kind: Option<String>,

        /// Path to a JSON element config
        #[arg(short, long)]
        config: Option<String>,

        /// Field update as name=value (repeatable, applied in order)
        #[arg(short, long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,

        /// Output scale (non-positive values render at 1x)
        #[arg(long)]
        scale: Option<f32>,

        /// Output directory (default: current directory)
        #[arg(short, long)]
        out: Option<String>,

        /// Seed for pixel noise
        #[arg(long, default_value_t = 0)]
        seed: u32,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the default configuration of an element kind as JSON
    Defaults {
        /// Element kind
        kind: String,
    },

    /// Check a config file for out-of-range values and malformed colors
    Validate {
        /// Path to the JSON element config
        file: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List element kinds and their default sizes
    Kinds {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(LoggingConfig::from_verbosity(cli.verbose));

    let result = match cli.command {
        Commands::Render {
            kind,
            config,
            set,
            scale,
            out,
            seed,
            json,
        } => {
            let args = RenderArgs {
                kind,
                config,
                set,
                scale,
                out,
                seed,
            };
            commands::render::run(&args, json)
        }
        Commands::Defaults { kind } => commands::defaults::run(&kind),
        Commands::Validate { file, json } => commands::validate::run(&file, json),
        Commands::Kinds { json } => commands::kinds::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_render_defaults() {
        let cli = Cli::try_parse_from(["uiforge", "render"]).unwrap();
        match cli.command {
            Commands::Render {
                kind,
                config,
                set,
                scale,
                out,
                seed,
                json,
            } => {
                assert!(kind.is_none());
                assert!(config.is_none());
                assert!(set.is_empty());
                assert!(scale.is_none());
                assert!(out.is_none());
                assert_eq!(seed, 0);
                assert!(!json);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_parses_render_with_sets() {
        let cli = Cli::try_parse_from([
            "uiforge",
            "render",
            "--kind",
            "healthbar",
            "--set",
            "value=35",
            "-s",
            "drawMode=frame",
            "--scale",
            "2",
            "--out",
            "build/ui",
            "--seed",
            "7",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Render {
                kind,
                set,
                scale,
                out,
                seed,
                json,
                ..
            } => {
                assert_eq!(kind.as_deref(), Some("healthbar"));
                assert_eq!(set, vec!["value=35", "drawMode=frame"]);
                assert_eq!(scale, Some(2.0));
                assert_eq!(out.as_deref(), Some("build/ui"));
                assert_eq!(seed, 7);
                assert!(json);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_counts_verbose_flags() {
        let cli = Cli::try_parse_from(["uiforge", "kinds", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Kinds { json: false }));
    }

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::try_parse_from(["uiforge", "defaults", "slot"]).unwrap();
        match cli.command {
            Commands::Defaults { kind } => assert_eq!(kind, "slot"),
            _ => panic!("expected defaults command"),
        }
    }

    #[test]
    fn test_cli_parses_validate_with_json() {
        let cli = Cli::try_parse_from(["uiforge", "validate", "bar.json", "--json"]).unwrap();
        match cli.command {
            Commands::Validate { file, json } => {
                assert_eq!(file, "bar.json");
                assert!(json);
            }
            _ => panic!("expected validate command"),
        }
    }

    #[test]
    fn test_cli_requires_validate_file() {
        assert!(Cli::try_parse_from(["uiforge", "validate"]).is_err());
    }

    #[test]
    fn test_cli_rejects_non_numeric_seed() {
        assert!(Cli::try_parse_from(["uiforge", "render", "--seed", "abc"]).is_err());
    }
}
