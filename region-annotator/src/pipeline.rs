use crate::canvas::{composite, decode_image, encode_png};
use crate::raster::{stroke_polygons, StrokeStyle};
use crate::AnnotateError;
use image::{DynamicImage, ImageError, RgbaImage};
use region_loader::Polygon;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// An input image read from disk and decoded, with its original bytes kept
/// for services that want the encoded form.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub image: DynamicImage,
}

impl SourceImage {
    pub fn open(path: &Path) -> Result<Self, AnnotateError> {
        let bytes = fs::read(path).map_err(|source| AnnotateError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let image = decode_image(&bytes).map_err(|source| AnnotateError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            bytes,
            image,
        })
    }
}

/// Copy `source` onto a fresh canvas and outline every region on it.
pub fn render_regions(
    source: &DynamicImage,
    regions: &[Polygon],
    style: &StrokeStyle,
) -> RgbaImage {
    let mut canvas = composite(source);
    let stroked = stroke_polygons(&mut canvas, regions, style);
    debug!("Stroked {} of {} regions", stroked, regions.len());
    canvas
}

/// Encode `canvas` as PNG and write it to `output_path`, overwriting any
/// existing file.
pub fn write_png(canvas: &RgbaImage, output_path: &Path) -> Result<(), AnnotateError> {
    let encode_error = |source: ImageError| AnnotateError::Encode {
        path: output_path.to_path_buf(),
        source,
    };
    let png_bytes = encode_png(canvas).map_err(encode_error)?;
    fs::write(output_path, png_bytes).map_err(|e| encode_error(ImageError::IoError(e)))?;

    info!("Saved {}x{} image to {}", canvas.width(), canvas.height(), output_path.display());
    Ok(())
}

/// Draw the regions onto the image at `image_path` and write the result as a
/// PNG to `output_path`, overwriting any existing file.
pub fn draw_areas(
    image_path: &Path,
    regions: &[Polygon],
    output_path: &Path,
    style: &StrokeStyle,
) -> Result<(), AnnotateError> {
    let source = SourceImage::open(image_path)?;
    let canvas = render_regions(&source.image, regions, style);
    write_png(&canvas, output_path)
}
