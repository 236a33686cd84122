//! Remote text detection: image bytes in, recognised text and its pixel
//! polygon out.

use image::ImageReader;
use region_loader::Polygon;
use std::io::Cursor;
use std::str::FromStr;
use thiserror::Error;

pub mod blocks;
pub mod textract;

pub use blocks::{blocks_to_detections, BlockKind, RawBlock};
pub use textract::TextractDetector;

/// One block of recognised text with its outline in pixel coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct TextDetection {
    pub text: String,
    pub polygon: Polygon,
}

/// Which detected blocks become regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextLevel {
    /// One region per line of text
    #[default]
    Line,
    /// One region per word
    Word,
}

impl FromStr for TextLevel {
    type Err = DetectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" => Ok(Self::Line),
            "word" => Ok(Self::Word),
            _ => Err(DetectorError::UnknownLevel(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum DetectorError {
    #[error(
        "AWS credentials not configured; set AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY, \
         run `aws configure`, or use an IAM role"
    )]
    MissingCredentials,
    #[error("cannot read image dimensions: {0}")]
    ImageHeader(#[from] image::ImageError),
    #[error("text detection request failed: {0}")]
    Request(String),
    #[error("unknown text level {0:?} (expected \"line\" or \"word\")")]
    UnknownLevel(String),
}

/// A service that finds text in an image.
///
/// Implementations return detections in service order with polygons already
/// converted to pixel coordinates of the submitted image.
#[allow(async_fn_in_trait)]
pub trait TextDetector {
    async fn detect(&self, image: &[u8]) -> Result<Vec<TextDetection>, DetectorError>;
}

/// Width and height from the image header, without decoding pixels
pub fn image_dimensions(image: &[u8]) -> Result<(u32, u32), DetectorError> {
    let reader = ImageReader::new(Cursor::new(image))
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?;
    Ok(reader.into_dimensions()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};

    #[test]
    fn test_text_level_parsing() {
        assert_eq!("line".parse::<TextLevel>().unwrap(), TextLevel::Line);
        assert_eq!(" WORD ".parse::<TextLevel>().unwrap(), TextLevel::Word);
        assert!(matches!(
            "paragraph".parse::<TextLevel>(),
            Err(DetectorError::UnknownLevel(_))
        ));
    }

    #[test]
    fn test_image_dimensions_from_png_header() {
        let img = RgbaImage::from_pixel(37, 12, Rgba([0, 0, 0, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        assert_eq!(image_dimensions(&bytes).unwrap(), (37, 12));
    }

    #[test]
    fn test_image_dimensions_rejects_garbage() {
        assert!(matches!(
            image_dimensions(b"definitely not an image"),
            Err(DetectorError::ImageHeader(_))
        ));
    }
}
