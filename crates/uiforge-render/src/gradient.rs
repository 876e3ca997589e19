//! Linear and radial gradient construction.
//!
//! Gradients are rebuilt on every render call; there is no cache. A
//! gradient that cannot be built (no stops, zero radius) degrades to a
//! solid color instead of failing.

use tiny_skia::{
    Color, GradientStop, LinearGradient, Point, RadialGradient, Shader, SpreadMode, Transform,
};

/// Builds a linear gradient from `(x0, y0)` to `(x1, y1)`.
///
/// `stops` are `(position, color)` pairs with positions in `[0, 1]`.
pub fn linear(x0: f32, y0: f32, x1: f32, y1: f32, stops: &[(f32, Color)]) -> Shader<'static> {
    LinearGradient::new(
        Point::from_xy(x0, y0),
        Point::from_xy(x1, y1),
        to_stops(stops),
        SpreadMode::Pad,
        Transform::identity(),
    )
    .unwrap_or_else(|| fallback(stops))
}

/// Builds a radial gradient centered on `(cx, cy)`.
///
/// Stop 0 sits on the inner radius and stop 1 on the outer radius; the
/// area inside the inner radius takes the first stop's color.
pub fn radial(
    cx: f32,
    cy: f32,
    inner_radius: f32,
    outer_radius: f32,
    stops: &[(f32, Color)],
) -> Shader<'static> {
    if !(outer_radius.is_finite() && outer_radius > 0.0) {
        return fallback(stops);
    }

    let ratio = (inner_radius / outer_radius).clamp(0.0, 1.0);
    let remapped: Vec<(f32, Color)> = stops
        .iter()
        .map(|&(pos, color)| (ratio + pos.clamp(0.0, 1.0) * (1.0 - ratio), color))
        .collect();

    let center = Point::from_xy(cx, cy);
    RadialGradient::new(
        center,
        center,
        outer_radius,
        to_stops(&remapped),
        SpreadMode::Pad,
        Transform::identity(),
    )
    .unwrap_or_else(|| fallback(stops))
}

fn to_stops(stops: &[(f32, Color)]) -> Vec<GradientStop> {
    stops
        .iter()
        .map(|&(pos, color)| GradientStop::new(pos, color))
        .collect()
}

fn fallback(stops: &[(f32, Color)]) -> Shader<'static> {
    let color = stops
        .last()
        .map(|&(_, color)| color)
        .unwrap_or(Color::TRANSPARENT);
    Shader::SolidColor(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stops_fall_back_to_transparent() {
        match linear(0.0, 0.0, 10.0, 0.0, &[]) {
            Shader::SolidColor(c) => assert_eq!(c, Color::TRANSPARENT),
            _ => panic!("expected solid fallback"),
        }
    }

    #[test]
    fn test_zero_radius_falls_back_to_last_stop() {
        let stops = [(0.0, Color::BLACK), (1.0, Color::WHITE)];
        match radial(5.0, 5.0, 0.0, 0.0, &stops) {
            Shader::SolidColor(c) => assert_eq!(c, Color::WHITE),
            _ => panic!("expected solid fallback"),
        }
    }

    #[test]
    fn test_two_stop_linear_is_a_gradient() {
        let stops = [(0.0, Color::BLACK), (1.0, Color::WHITE)];
        assert!(matches!(
            linear(0.0, 0.0, 0.0, 10.0, &stops),
            Shader::LinearGradient(_)
        ));
    }
}
