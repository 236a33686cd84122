//! Region Sets from plain-text coordinate files.
//!
//! One polygon per line, eight comma-separated numbers forming four `(x, y)`
//! corners: `x1,y1,x2,y2,x3,y3,x4,y4`. No header. Blank lines are skipped.

use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub mod geometry;

pub use geometry::{Polygon, RegionSet, Vertex};

/// Values per coordinate line: four corners, x then y.
pub const FIELDS_PER_LINE: usize = 8;

/// Error types for the coordinate loader
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("cannot access coordinate file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: expected 8 comma-separated values, found {found}")]
    FieldCount { line: u64, found: usize },
    #[error("line {line}, field {field}: {value:?} is not a valid coordinate")]
    InvalidNumber {
        line: u64,
        field: usize,
        value: String,
    },
}

/// Load a coordinate file from disk
pub fn load_coordinates(path: &Path) -> Result<RegionSet, LoaderError> {
    let file = File::open(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let regions = parse_coordinates(file)?;
    info!("Loaded {} regions from {}", regions.len(), path.display());
    Ok(regions)
}

/// Parse coordinate lines into one 4-vertex polygon each.
///
/// Values are read as decimals and truncated toward zero. Any line that does
/// not hold exactly eight finite numbers is rejected with its 1-based line
/// number; nothing is coerced to zero.
pub fn parse_coordinates<R: Read>(source: R) -> Result<RegionSet, LoaderError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(source);

    let mut regions = RegionSet::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        // Whitespace-only line
        if record.len() <= 1 && record.iter().all(str::is_empty) {
            debug!("Skipping blank line {}", line);
            continue;
        }

        if record.len() != FIELDS_PER_LINE {
            return Err(LoaderError::FieldCount {
                line,
                found: record.len(),
            });
        }

        let mut values = [0i32; FIELDS_PER_LINE];
        for (i, field) in record.iter().enumerate() {
            values[i] = parse_field(field).ok_or_else(|| LoaderError::InvalidNumber {
                line,
                field: i + 1,
                value: field.to_string(),
            })?;
        }

        regions.push(
            values
                .chunks_exact(2)
                .map(|pair| Vertex::new(pair[0], pair[1]))
                .collect(),
        );
    }

    Ok(regions)
}

fn parse_field(field: &str) -> Option<i32> {
    let value: f64 = field.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    // Saturates beyond the i32 range
    Some(value.trunc() as i32)
}

/// Write a Region Set in the coordinate-file format.
///
/// Polygons that are not quadrilaterals are written as their bounding box;
/// empty polygons are skipped. Returns the number of lines written.
pub fn write_coordinates<W: Write>(sink: W, regions: &[Polygon]) -> Result<usize, LoaderError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(sink);
    let mut written = 0;

    for quad in regions.iter().filter_map(Polygon::to_quad) {
        let record: Vec<String> = quad
            .iter()
            .flat_map(|v| [v.x.to_string(), v.y.to_string()])
            .collect();
        writer.write_record(&record)?;
        written += 1;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(written)
}

/// Save a Region Set to disk, overwriting any existing file
pub fn save_coordinates(path: &Path, regions: &[Polygon]) -> Result<usize, LoaderError> {
    let file = File::create(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let written = write_coordinates(file, regions)?;
    info!("Saved {} regions to {}", written, path.display());
    Ok(written)
}
