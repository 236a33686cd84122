//! Outline regions on an image, either from a remote text-detection service
//! or from a coordinate file, and save the result as PNG.

pub mod canvas;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod raster;

pub use error::AnnotateError;
pub use pipeline::draw_areas;
pub use raster::StrokeStyle;
