//! Pixel grain applied after all vector layers of an element.

use tiny_skia::{ColorU8, Pixmap};

use crate::rng::DeterministicRng;

/// Perturbs every visible pixel by a random luminance offset in
/// `[-amount * 255 / 2, amount * 255 / 2)`.
///
/// One offset is drawn per pixel and added to R, G and B alike, so the
/// grain stays monochrome. Alpha is untouched, fully transparent pixels
/// are skipped, and `amount <= 0` leaves the buffer bit-identical.
pub fn apply_noise(pixmap: &mut Pixmap, amount: f32, rng: &mut DeterministicRng) {
    if !(amount > 0.0) {
        return;
    }
    let magnitude = amount * 255.0;

    for px in pixmap.pixels_mut() {
        if px.alpha() == 0 {
            continue;
        }
        let offset = rng.gen_centered_f32() * magnitude;
        let c = px.demultiply();
        let shift = |v: u8| (f32::from(v) + offset).round().clamp(0.0, 255.0) as u8;
        *px = ColorU8::from_rgba(shift(c.red()), shift(c.green()), shift(c.blue()), c.alpha())
            .premultiply();
    }
}
