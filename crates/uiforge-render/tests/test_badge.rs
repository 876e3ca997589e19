//! Badge geometry and the star-with-ribbon scenario.

use uiforge_render::elements::badge::{ribbon_points, star_points, BADGE_INSET};
use uiforge_render::path;
use uiforge_render::{render_element, RenderOptions};
use uiforge_spec::{BadgeConfig, BadgeShape, ElementConfig};

fn star_badge() -> BadgeConfig {
    BadgeConfig {
        shape: BadgeShape::Star,
        primary_color: "#ef4444".to_string(),
        secondary_color: "#991b1b".to_string(),
        border_width: 4.0,
        ribbon: true,
        icon_text: "10".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_star_outline_has_ten_vertices() {
    let config = star_badge();
    let (cx, cy) = (config.width as f32 / 2.0, config.height as f32 / 2.0);
    let size = (config.width.min(config.height) as f32) / 2.0 - BADGE_INSET;

    let points = star_points(cx, cy, size);
    assert_eq!(points.len(), 10);
    let outline = path::polygon(&points).unwrap();
    assert_eq!(outline.points().len(), 10);
}

#[test]
fn test_ribbon_below_center() {
    let (cx, cy, size) = (50.0, 50.0, 40.0);
    let ribbon = path::polygon(&ribbon_points(cx, cy, size)).unwrap();
    let bounds = ribbon.bounds();
    assert!(bounds.top() > cy, "ribbon top {} not below {}", bounds.top(), cy);
    assert!(bounds.bottom() <= cy + size + 5.0);
}

#[test]
fn test_star_badge_render() {
    let config = ElementConfig::Badge(star_badge());
    let frame = render_element(&config, &RenderOptions::default()).unwrap();
    assert_eq!((frame.width(), frame.height()), (120, 120));

    // Ribbon banner in its fixed color
    assert_eq!(frame.element_pixel(50.0, 80.0), Some([185, 28, 28, 255]));

    // Upper spike carries the top of the red gradient
    let spike = frame.element_pixel(50.0, 20.0).unwrap();
    assert_eq!(spike[3], 255);
    assert!(spike[0] > 200 && spike[1] < 100, "unexpected spike color {:?}", spike);

    // Outside the star between the two upper spikes
    assert_eq!(frame.element_pixel(30.0, 12.0).map(|p| p[3]), Some(0));
}

#[test]
fn test_label_is_white() {
    let config = BadgeConfig {
        shape: BadgeShape::Circle,
        primary_color: "#000000".to_string(),
        secondary_color: "#000000".to_string(),
        ribbon: false,
        icon_text: "88".to_string(),
        ..Default::default()
    };
    let frame = render_element(&ElementConfig::Badge(config), &RenderOptions::default()).unwrap();
    let white = frame.pixmap().pixels().iter().any(|p| {
        let c = p.demultiply();
        c.red() == 255 && c.green() == 255 && c.blue() == 255 && c.alpha() == 255
    });
    assert!(white);
}
