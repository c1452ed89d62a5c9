//! Lossless encoding of the mask raster for the generation service
//! adapter. The adapter owns transport and auth; this module only turns
//! the composited raster into a PNG byte-stream.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no image loaded; nothing to export")]
    ImageNotLoaded,
    #[error("png encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

pub type ExportResult<T> = std::result::Result<T, ExportError>;

/// Encodes an RGBA raster as PNG. The mask's alpha channel is the payload,
/// so only a lossless, alpha-preserving format is acceptable here.
pub fn encode_png(raster: &RgbaImage) -> ExportResult<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        raster.as_raw(),
        raster.width(),
        raster.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(bytes)
}
