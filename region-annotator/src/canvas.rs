//! Image codec seam: bytes to canvas and canvas to PNG bytes.

use image::{DynamicImage, ImageFormat, ImageResult, RgbaImage};
use std::io::Cursor;

/// Decode any enabled raster format, guessed from the content
pub fn decode_image(bytes: &[u8]) -> ImageResult<DynamicImage> {
    image::load_from_memory(bytes)
}

/// Fresh RGBA canvas with the source's dimensions and its pixels copied in
/// unblended.
pub fn composite(source: &DynamicImage) -> RgbaImage {
    source.to_rgba8()
}

pub fn encode_png(canvas: &RgbaImage) -> ImageResult<Vec<u8>> {
    let mut png_bytes = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)?;
    Ok(png_bytes)
}
