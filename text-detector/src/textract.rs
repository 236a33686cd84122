use crate::{
    blocks_to_detections, image_dimensions, BlockKind, DetectorError, RawBlock, TextDetection,
    TextDetector, TextLevel,
};
use aws_config::BehaviorVersion;
use aws_sdk_textract::{
    error::DisplayErrorContext,
    primitives::Blob,
    types::{Block, BlockType, Document},
    Client as TextractClient,
};
use tracing::info;

/// Text detection backed by AWS Textract `DetectDocumentText`
pub struct TextractDetector {
    client: TextractClient,
    level: TextLevel,
}

impl TextractDetector {
    pub fn new(client: TextractClient, level: TextLevel) -> Self {
        Self { client, level }
    }

    /// Create from the standard AWS environment (credential chain, region,
    /// profile).
    pub async fn from_env(level: TextLevel) -> Result<Self, DetectorError> {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;

        if config.credentials_provider().is_none() {
            return Err(DetectorError::MissingCredentials);
        }

        info!(
            "AWS Textract client ready (Region: {})",
            config.region().map(|r| r.as_ref()).unwrap_or("default")
        );

        Ok(Self::new(TextractClient::new(&config), level))
    }
}

impl TextDetector for TextractDetector {
    async fn detect(&self, image: &[u8]) -> Result<Vec<TextDetection>, DetectorError> {
        let (width, height) = image_dimensions(image)?;

        let document = Document::builder()
            .bytes(Blob::new(image.to_vec()))
            .build();

        info!("Sending {} bytes to Textract ({}x{})", image.len(), width, height);

        let response = self
            .client
            .detect_document_text()
            .document(document)
            .send()
            .await
            .map_err(|e| DetectorError::Request(DisplayErrorContext(&e).to_string()))?;

        let blocks: Vec<RawBlock> = response.blocks().iter().map(raw_block).collect();
        let detections = blocks_to_detections(&blocks, self.level, width, height);

        info!(
            "Textract returned {} blocks, {} at {:?} level",
            blocks.len(),
            detections.len(),
            self.level
        );

        Ok(detections)
    }
}

fn raw_block(block: &Block) -> RawBlock {
    let kind = match block.block_type() {
        Some(BlockType::Line) => BlockKind::Line,
        Some(BlockType::Word) => BlockKind::Word,
        _ => BlockKind::Other,
    };

    let polygon = block
        .geometry()
        .map(|g| g.polygon().iter().map(|p| (p.x(), p.y())).collect())
        .unwrap_or_default();

    RawBlock {
        kind,
        text: block.text().map(str::to_string),
        polygon,
    }
}
