//! Render command implementation
//!
//! Builds an element configuration from defaults, an optional config file
//! and `--set` updates, renders it, and writes the PNG export.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;
use uiforge_render::{render_element, PngConfig, PngError, RenderError, RenderOptions};
use uiforge_spec::{validate_config, ElementConfig, ElementKind, ForgeState};

use super::json_output::{
    error_codes, input_error_to_json, JsonError, JsonWarning, RenderOutput, RenderResult,
};
use crate::input::{load_config, parse_assignment, InputError};

/// Arguments of the render command.
#[derive(Debug, Clone, Default)]
pub struct RenderArgs {
    /// Element kind to render (defaults to the config file's kind, else healthbar)
    pub kind: Option<String>,
    /// Path to a JSON element config
    pub config: Option<String>,
    /// `name=value` field updates, applied in order
    pub set: Vec<String>,
    /// Output scale override
    pub scale: Option<f32>,
    /// Output directory
    pub out: Option<String>,
    /// Noise seed
    pub seed: u32,
}

/// Run the render command
///
/// # Returns
/// Exit code: 0 on success, 1 for input errors, 2 if rendering failed
pub fn run(args: &RenderArgs, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(args)
    } else {
        run_human(args)
    }
}

fn run_human(args: &RenderArgs) -> Result<ExitCode> {
    let config = build_config(args)?;
    let kind = config.kind();

    println!(
        "{} {} ({})",
        "Rendering:".cyan().bold(),
        kind,
        config.draw_mode_label()
    );

    for warning in validate_config(&config) {
        println!(
            "  {} [{}] {}: {}",
            "!".yellow(),
            warning.code,
            warning.field.dimmed(),
            warning.message
        );
    }

    match write_render(&config, args.seed, &out_dir(args), epoch_millis()) {
        Ok(result) => {
            println!("{} {}", "Wrote:".dimmed(), result.path);
            println!(
                "{} {}x{} px, {}",
                "SUCCESS".green().bold(),
                result.width,
                result.height,
                &result.hash[..16]
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{} {}", "FAILED".red().bold(), e);
            Ok(ExitCode::from(2))
        }
    }
}

fn run_json(args: &RenderArgs) -> Result<ExitCode> {
    let config = match build_config(args) {
        Ok(config) => config,
        Err(e) => {
            let error = match e.downcast_ref::<InputError>() {
                Some(input) => input_error_to_json(input, args.config.as_deref()),
                None => JsonError::new(error_codes::CONFIG_UPDATE, format!("{:#}", e)),
            };
            let output = RenderOutput::failure(vec![error], Vec::new());
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
    };

    let warnings: Vec<JsonWarning> = validate_config(&config)
        .iter()
        .map(JsonWarning::from)
        .collect();

    let (output, code) = match write_render(&config, args.seed, &out_dir(args), epoch_millis()) {
        Ok(result) => (RenderOutput::success(result, warnings), ExitCode::SUCCESS),
        Err(e) => {
            let code = match e {
                RenderError::SurfaceUnavailable { .. } => error_codes::SURFACE_UNAVAILABLE,
                RenderError::Png(_) => error_codes::OUTPUT_WRITE,
            };
            let error = JsonError::new(code, e.to_string());
            (RenderOutput::failure(vec![error], warnings), ExitCode::from(2))
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(code)
}

/// Assembles the configuration to render.
///
/// Order: defaults, then the config file, then `--kind`, then each `--set`
/// in turn, then `--scale`. A `--kind` that disagrees with the config file
/// is an error rather than a silent switch.
pub fn build_config(args: &RenderArgs) -> Result<ElementConfig> {
    let mut state = ForgeState::new();

    if let Some(path) = &args.config {
        let config = load_config(Path::new(path))
            .with_context(|| format!("Failed to load config file: {}", path))?;
        state.replace(config);
    }

    if let Some(name) = &args.kind {
        let kind = ElementKind::from_str(name)?;
        if args.config.is_some() && kind != state.active() {
            bail!(
                "--kind {} does not match the config file's kind ({})",
                kind,
                state.active()
            );
        }
        state.set_active(kind);
    }

    for raw in &args.set {
        let (field, value) = parse_assignment(raw)?;
        state
            .set_field_raw(field, value)
            .with_context(|| format!("Failed to apply --set {}", raw))?;
    }

    let mut config = state.active_config();
    if let Some(scale) = args.scale {
        config.set_scale(scale);
    }
    Ok(config)
}

/// Renders `config` and writes `<kind>_<drawMode>_<epochMillis>.png` into
/// `out_dir`, creating the directory when needed.
pub fn write_render(
    config: &ElementConfig,
    seed: u32,
    out_dir: &Path,
    epoch_millis: i64,
) -> Result<RenderResult, RenderError> {
    let rendered = render_element(config, &RenderOptions::with_seed(seed))?;
    let (bytes, hash) = rendered.encode_png(&PngConfig::default())?;

    std::fs::create_dir_all(out_dir).map_err(PngError::from)?;
    let path = out_dir.join(config.export_file_name(epoch_millis));
    std::fs::write(&path, &bytes).map_err(PngError::from)?;
    log::info!("wrote {} ({} bytes)", path.display(), bytes.len());

    Ok(RenderResult {
        kind: config.kind().to_string(),
        draw_mode: config.draw_mode_label().to_string(),
        path: path.display().to_string(),
        width: rendered.width(),
        height: rendered.height(),
        hash,
    })
}

fn out_dir(args: &RenderArgs) -> PathBuf {
    PathBuf::from(args.out.as_deref().unwrap_or("."))
}

fn epoch_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uiforge_spec::{BarDrawMode, SliderDrawMode};

    fn args() -> RenderArgs {
        RenderArgs::default()
    }

    #[test]
    fn test_build_defaults_to_healthbar() {
        let config = build_config(&args()).unwrap();
        assert_eq!(config.kind(), ElementKind::HealthBar);
    }

    #[test]
    fn test_build_with_kind_and_sets() {
        let args = RenderArgs {
            kind: Some("slider".into()),
            set: vec!["value=25".into(), "drawMode=track".into()],
            ..args()
        };
        match build_config(&args).unwrap() {
            ElementConfig::Slider(cfg) => {
                assert_eq!(cfg.value, 25.0);
                assert_eq!(cfg.draw_mode, SliderDrawMode::Track);
            }
            other => panic!("expected slider, got {}", other.kind()),
        }
    }

    #[test]
    fn test_sets_apply_in_order() {
        let args = RenderArgs {
            set: vec!["drawMode=frame".into(), "drawMode=fill".into()],
            ..args()
        };
        match build_config(&args).unwrap() {
            ElementConfig::HealthBar(cfg) => assert_eq!(cfg.draw_mode, BarDrawMode::Fill),
            other => panic!("expected healthbar, got {}", other.kind()),
        }
    }

    #[test]
    fn test_scale_override() {
        let args = RenderArgs {
            kind: Some("badge".into()),
            scale: Some(2.0),
            ..args()
        };
        assert_eq!(build_config(&args).unwrap().scale(), 2.0);
    }

    #[test]
    fn test_unknown_kind_is_error() {
        let args = RenderArgs {
            kind: Some("spaceship".into()),
            ..args()
        };
        assert!(build_config(&args).is_err());
    }

    #[test]
    fn test_unknown_field_is_error() {
        let args = RenderArgs {
            set: vec!["warpFactor=9".into()],
            ..args()
        };
        let err = build_config(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("warpFactor"));
    }

    #[test]
    fn test_malformed_assignment_downcasts_to_input_error() {
        let args = RenderArgs {
            set: vec!["value".into()],
            ..args()
        };
        let err = build_config(&args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::InvalidAssignment { .. })
        ));
    }

    #[test]
    fn test_write_render_names_file() {
        let tmp = tempfile::tempdir().unwrap();
        let config = ElementConfig::default_for(ElementKind::HealthBar);
        let result = write_render(&config, 0, tmp.path(), 1_700_000_000_000).unwrap();

        assert_eq!(result.kind, "healthbar");
        assert_eq!(result.draw_mode, "full");
        assert_eq!((result.width, result.height), (320, 52));
        let expected = tmp.path().join("healthbar_full_1700000000000.png");
        assert!(expected.exists());
        assert_eq!(result.path, expected.display().to_string());
    }

    #[test]
    fn test_write_render_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("ui").join("bars");
        let config = ElementConfig::default_for(ElementKind::Slot);
        write_render(&config, 0, &nested, 1).unwrap();
        assert!(nested.join("slot_full_1.png").exists());
    }
}
