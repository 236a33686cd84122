use crate::cli::{DrawArgs, VisionArgs};
use crate::config::AnnotatorConfig;
use crate::pipeline::{draw_areas, render_regions, write_png, SourceImage};
use crate::AnnotateError;
use region_loader::{load_coordinates, save_coordinates, RegionSet};
use std::future::Future;
use text_detector::{DetectorError, TextDetection, TextDetector};
use tracing::info;

/// `draw`: outline the polygons from a coordinate file.
/// Returns the number of regions read.
pub fn run_draw(args: &DrawArgs, config: &AnnotatorConfig) -> Result<usize, AnnotateError> {
    let regions = load_coordinates(&args.coords)?;
    draw_areas(&args.image, &regions, &args.out, &config.stroke)?;
    Ok(regions.len())
}

/// `vision`: detect text remotely, print it, and outline every detection.
///
/// The image is read and decoded before `connect` builds the detector, so a
/// missing or corrupt input never reaches the service. Nothing is written
/// when detection fails.
pub async fn run_vision<D, F, Fut>(
    connect: F,
    args: &VisionArgs,
    config: &AnnotatorConfig,
) -> Result<Vec<TextDetection>, AnnotateError>
where
    D: TextDetector,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<D, DetectorError>>,
{
    let source = SourceImage::open(&args.image)?;
    let detector = connect().await?;

    let detections = detector.detect(&source.bytes).await?;
    info!("Detected {} text regions in {}", detections.len(), source.path.display());

    println!("text returned from text detection:");
    for detection in &detections {
        println!("{}", detection.text);
    }

    let regions: RegionSet = detections.iter().map(|d| d.polygon.clone()).collect();

    if let Some(path) = &args.save_coords {
        save_coordinates(path, &regions)?;
    }

    let canvas = render_regions(&source.image, &regions, &config.stroke);
    write_png(&canvas, &args.out)?;

    Ok(detections)
}
