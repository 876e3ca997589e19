//! Deterministic PNG export of rendered surfaces.
//!
//! Fixed encoder settings keep the output byte-identical for identical
//! pixels, so exported assets can be compared by hash.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;
use tiny_skia::Pixmap;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),
}

/// Encoder settings.
#[derive(Debug, Clone)]
pub struct PngConfig {
    pub compression: Compression,
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Smaller files at the cost of encode time.
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }
}

/// Straight-alpha RGBA bytes of a premultiplied pixmap, row-major.
pub fn straight_rgba(pixmap: &Pixmap) -> Vec<u8> {
    let mut data = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    data
}

/// Encode `pixmap` as 8-bit RGBA into any writer.
pub fn write_pixmap_to_writer<W: Write>(
    pixmap: &Pixmap,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let mut encoder = Encoder::new(writer, pixmap.width(), pixmap.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&straight_rgba(pixmap))?;

    Ok(())
}

/// Encode `pixmap` to a PNG file.
pub fn write_pixmap(pixmap: &Pixmap, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);

    write_pixmap_to_writer(pixmap, writer, config)
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode to memory and return the bytes with their hash.
pub fn write_pixmap_to_vec_with_hash(
    pixmap: &Pixmap,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_pixmap_to_writer(pixmap, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}
