//! Per-element drawing procedures.
//!
//! Every element kind implements [`ElementRenderer`]. The dispatcher sizes
//! and clears the canvas, translates the origin by [`padding`], and then
//! hands the canvas to [`render`] so that element geometry is expressed in
//! logical `[0, width] x [0, height]` coordinates.
//!
//! [`padding`]: ElementRenderer::padding
//! [`render`]: ElementRenderer::render

pub mod badge;
pub mod button;
pub mod crosshair;
pub mod healthbar;
pub mod panel;
pub mod slider;
pub mod slot;

use crate::canvas::Canvas;
use crate::rng::DeterministicRng;

/// Drawing procedure for one element kind.
pub trait ElementRenderer {
    /// Margin kept around the logical element so strokes and shadows near
    /// its edges are not cut off.
    fn padding(&self) -> f32;

    /// Paints the element. Never fails; degenerate parameters degrade to
    /// partial or empty output.
    fn render(&self, canvas: &mut Canvas, rng: &mut DeterministicRng);
}
