//! Integration tests for the CLI commands, driven through the library API.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use pretty_assertions::assert_eq;
use uiforge_cli::commands::render::{build_config, write_render, RenderArgs};
use uiforge_cli::commands::{defaults, kinds, render, validate};
use uiforge_spec::{ElementConfig, ElementKind};

fn write_config(dir: &Path, name: &str, json: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, json).unwrap();
    path.display().to_string()
}

fn png_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".png"))
        .collect();
    names.sort();
    names
}

// ============================================================================
// Render
// ============================================================================

#[test]
fn test_render_writes_png_named_by_kind_and_mode() {
    let tmp = tempfile::tempdir().unwrap();
    let args = RenderArgs {
        kind: Some("healthbar".into()),
        set: vec!["drawMode=frame".into()],
        out: Some(tmp.path().display().to_string()),
        ..RenderArgs::default()
    };

    let code = render::run(&args, false).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let files = png_files(tmp.path());
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("healthbar_frame_"));
}

#[test]
fn test_render_json_mode_writes_png() {
    let tmp = tempfile::tempdir().unwrap();
    let args = RenderArgs {
        kind: Some("slider".into()),
        set: vec!["drawMode=thumb".into()],
        out: Some(tmp.path().display().to_string()),
        ..RenderArgs::default()
    };

    assert_eq!(render::run(&args, true).unwrap(), ExitCode::SUCCESS);
    let files = png_files(tmp.path());
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("slider_thumb_"));
}

#[test]
fn test_render_json_mode_reports_bad_input() {
    let tmp = tempfile::tempdir().unwrap();
    let args = RenderArgs {
        set: vec!["noSuchField=1".into()],
        out: Some(tmp.path().display().to_string()),
        ..RenderArgs::default()
    };

    assert_eq!(render::run(&args, true).unwrap(), ExitCode::from(1));
    assert!(png_files(tmp.path()).is_empty());
}

#[test]
fn test_render_human_mode_propagates_bad_input() {
    let args = RenderArgs {
        kind: Some("spaceship".into()),
        ..RenderArgs::default()
    };
    assert!(render::run(&args, false).is_err());
}

#[test]
fn test_render_from_config_file_then_sets() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_config(
        tmp.path(),
        "button.json",
        r##"{"kind": "button", "text": "START", "bgColor": "#ff0000"}"##,
    );
    let args = RenderArgs {
        config: Some(path),
        set: vec!["text=QUIT".into()],
        ..RenderArgs::default()
    };

    match build_config(&args).unwrap() {
        ElementConfig::Button(cfg) => {
            assert_eq!(cfg.text, "QUIT");
            assert_eq!(cfg.bg_color, "#ff0000");
        }
        other => panic!("expected button, got {}", other.kind()),
    }
}

#[test]
fn test_kind_must_match_config_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_config(tmp.path(), "slot.json", r#"{"kind": "slot"}"#);
    let args = RenderArgs {
        kind: Some("badge".into()),
        config: Some(path.clone()),
        ..RenderArgs::default()
    };
    assert!(build_config(&args).is_err());

    let args = RenderArgs {
        kind: Some("slot".into()),
        config: Some(path),
        ..RenderArgs::default()
    };
    assert_eq!(build_config(&args).unwrap().kind(), ElementKind::Slot);
}

#[test]
fn test_same_seed_same_bytes() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = ElementConfig::default_for(ElementKind::HealthBar);
    if let ElementConfig::HealthBar(cfg) = &mut config {
        cfg.noise = 0.5;
    }

    let a = write_render(&config, 3, &tmp.path().join("a"), 1).unwrap();
    let b = write_render(&config, 3, &tmp.path().join("b"), 1).unwrap();
    assert_eq!(a.hash, b.hash);
    assert_eq!(
        fs::read(tmp.path().join("a/healthbar_full_1.png")).unwrap(),
        fs::read(tmp.path().join("b/healthbar_full_1.png")).unwrap()
    );
}

#[test]
fn test_scaled_render_dimensions() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = ElementConfig::default_for(ElementKind::Button);
    config.set_scale(2.0);
    let result = write_render(&config, 0, tmp.path(), 1).unwrap();
    assert_eq!((result.width, result.height), (480, 200));
}

// ============================================================================
// Validate
// ============================================================================

#[test]
fn test_validate_clean_config() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_config(tmp.path(), "bar.json", r#"{"kind": "healthbar", "value": 40}"#);
    assert_eq!(validate::run(&path, false).unwrap(), ExitCode::SUCCESS);
    assert_eq!(validate::run(&path, true).unwrap(), ExitCode::SUCCESS);
}

#[test]
fn test_validate_warnings_exit_one() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_config(
        tmp.path(),
        "bar.json",
        r#"{"kind": "healthbar", "value": 150, "bgColor": "navy"}"#,
    );
    assert_eq!(validate::run(&path, false).unwrap(), ExitCode::from(1));
    assert_eq!(validate::run(&path, true).unwrap(), ExitCode::from(1));
}

#[test]
fn test_validate_missing_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("missing.json").display().to_string();
    assert!(validate::run(&path, false).is_err());
    assert_eq!(validate::run(&path, true).unwrap(), ExitCode::from(1));
}

// ============================================================================
// Defaults and kinds
// ============================================================================

#[test]
fn test_defaults_output_loads_back() {
    let tmp = tempfile::tempdir().unwrap();
    let json = defaults::defaults_json("panel").unwrap();
    let path = write_config(tmp.path(), "panel.json", &json);
    assert_eq!(validate::run(&path, true).unwrap(), ExitCode::SUCCESS);
}

#[test]
fn test_kinds_lists_every_kind() {
    let names: Vec<String> = kinds::entries().into_iter().map(|e| e.kind).collect();
    assert_eq!(
        names,
        vec!["button", "healthbar", "panel", "crosshair", "slot", "badge", "slider"]
    );
    assert_eq!(kinds::run(true).unwrap(), ExitCode::SUCCESS);
}
