use image::ImageError;
use region_loader::LoaderError;
use std::io;
use std::path::PathBuf;
use text_detector::DetectorError;
use thiserror::Error;

/// Every failure is fatal for the run
#[derive(Debug, Error)]
pub enum AnnotateError {
    #[error("cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("text detection failed: {0}")]
    RemoteService(#[from] DetectorError),
    #[error("cannot write {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("invalid coordinate file: {0}")]
    Coordinates(#[from] LoaderError),
}
