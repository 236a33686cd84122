use crate::{TextDetection, TextLevel};
use region_loader::{Polygon, Vertex};
use tracing::debug;

/// Block category as reported by the detection service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Line,
    Word,
    Other,
}

/// Service-independent view of one detected block.
///
/// Polygon points are ratios of the page width and height, `0.0..=1.0` for
/// points on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBlock {
    pub kind: BlockKind,
    pub text: Option<String>,
    pub polygon: Vec<(f32, f32)>,
}

impl BlockKind {
    fn matches(self, level: TextLevel) -> bool {
        matches!(
            (self, level),
            (BlockKind::Line, TextLevel::Line) | (BlockKind::Word, TextLevel::Word)
        )
    }
}

/// Keep blocks at the requested level and convert their outlines to pixels
/// of a `width` x `height` image. Service order is preserved.
pub fn blocks_to_detections(
    blocks: &[RawBlock],
    level: TextLevel,
    width: u32,
    height: u32,
) -> Vec<TextDetection> {
    let mut detections = Vec::new();

    for block in blocks.iter().filter(|b| b.kind.matches(level)) {
        let Some(text) = &block.text else {
            debug!("Skipping {:?} block without text", block.kind);
            continue;
        };
        if block.polygon.is_empty() {
            debug!("Skipping block {:?} without geometry", text);
            continue;
        }

        let polygon: Polygon = block
            .polygon
            .iter()
            .map(|&(x, y)| Vertex::new(to_pixel(x, width), to_pixel(y, height)))
            .collect();

        detections.push(TextDetection {
            text: text.clone(),
            polygon,
        });
    }

    detections
}

fn to_pixel(ratio: f32, extent: u32) -> i32 {
    (f64::from(ratio) * f64::from(extent)).round() as i32
}
