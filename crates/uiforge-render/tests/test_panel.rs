//! Panel styles, patterns and the noise pattern post-process.

use uiforge_render::{render_element, RenderOptions, RenderedElement};
use uiforge_spec::{ElementConfig, PanelConfig, PanelPattern, PanelStyle};

fn render(config: PanelConfig) -> RenderedElement {
    render_element(&ElementConfig::Panel(config), &RenderOptions::with_seed(11)).unwrap()
}

#[test]
fn test_window_close_control() {
    let frame = render(PanelConfig::default());
    // Close control sits 20px from the right edge, centered in the header
    assert_eq!(frame.element_pixel(380.0, 20.0), Some([239, 68, 68, 255]));
}

#[test]
fn test_glow_spills_into_padding() {
    let glowing = render(PanelConfig::default());
    let halo = glowing.element_pixel(-4.0, 150.0).unwrap();
    assert!(halo[3] > 0, "expected glow halo, got {:?}", halo);

    let flat = render(PanelConfig {
        glow: false,
        ..Default::default()
    });
    assert_eq!(flat.element_pixel(-4.0, 150.0).map(|p| p[3]), Some(0));
}

#[test]
fn test_tech_accents_use_glow_color() {
    let frame = render(PanelConfig {
        style: PanelStyle::Tech,
        border_color: "#ffffff".to_string(),
        glow: false,
        pattern: PanelPattern::None,
        ..Default::default()
    });
    assert_eq!(frame.element_pixel(0.0, 30.0), Some([59, 130, 246, 255]));
    // Cut corner stays empty
    assert_eq!(frame.element_pixel(3.0, 3.0).map(|p| p[3]), Some(0));
}

#[test]
fn test_noise_pattern_only_touches_body() {
    let base = PanelConfig {
        glow: false,
        style: PanelStyle::Solid,
        pattern: PanelPattern::None,
        pattern_opacity: 0.3,
        ..Default::default()
    };
    let clean = render(base.clone());
    let noisy = render(PanelConfig {
        pattern: PanelPattern::Noise,
        ..base
    });

    let mut changed = 0;
    for (a, b) in clean.pixmap().pixels().iter().zip(noisy.pixmap().pixels()) {
        if a.alpha() == 0 {
            assert_eq!(a, b);
        } else if a != b {
            changed += 1;
        }
    }
    assert!(changed > 0);
}

#[test]
fn test_scanlines_alternate() {
    let frame = render(PanelConfig {
        glow: false,
        style: PanelStyle::Solid,
        pattern: PanelPattern::Scanlines,
        pattern_opacity: 0.5,
        bg_opacity: 1.0,
        ..Default::default()
    });
    let on_line = frame.element_pixel(200.0, 100.0).unwrap();
    let between = frame.element_pixel(200.0, 102.0).unwrap();
    assert!(on_line[0] > between[0], "{:?} vs {:?}", on_line, between);
}

#[test]
fn test_glow_carries_through_pattern() {
    let base = PanelConfig {
        style: PanelStyle::Solid,
        pattern: PanelPattern::Scanlines,
        pattern_opacity: 1.0,
        bg_opacity: 1.0,
        ..Default::default()
    };
    let bare = PanelConfig {
        pattern: PanelPattern::None,
        ..base.clone()
    };

    // Between two scanlines the only contribution is the lines' glow
    let lined = render(base.clone()).element_pixel(200.0, 102.0).unwrap();
    let plain = render(bare.clone()).element_pixel(200.0, 102.0).unwrap();
    assert!(lined[2] > plain[2] + 10, "{:?} vs {:?}", lined, plain);

    let lined = render(PanelConfig {
        glow: false,
        ..base
    });
    let plain = render(PanelConfig {
        glow: false,
        ..bare
    });
    assert_eq!(lined.element_pixel(200.0, 102.0), plain.element_pixel(200.0, 102.0));
}
