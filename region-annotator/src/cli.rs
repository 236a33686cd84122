//! Command-line surface.
//!
//! Flags are accepted in single-dash form (`-image path`) as well as the
//! usual `--image path`.

use clap::{Args, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "region-annotator",
    version,
    about = "Outline detected text or listed coordinates on an image",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Detect text with the remote service and outline every block
    Vision(VisionArgs),
    /// Outline the polygons listed in a coordinate file
    Draw(DrawArgs),
}

#[derive(Debug, Args)]
pub struct VisionArgs {
    /// image file path
    #[arg(long, value_name = "PATH")]
    pub image: PathBuf,
    /// output file path
    #[arg(long, value_name = "PATH")]
    pub out: PathBuf,
    /// also write the detected regions as a coordinate file
    #[arg(long = "save-coords", value_name = "PATH")]
    pub save_coords: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct DrawArgs {
    /// image file path
    #[arg(long, value_name = "PATH")]
    pub image: PathBuf,
    /// coordinates file path
    #[arg(long, value_name = "PATH")]
    pub coords: PathBuf,
    /// output file path
    #[arg(long, value_name = "PATH")]
    pub out: PathBuf,
}

const LONG_FLAGS: &[&str] = &["image", "out", "coords", "save-coords", "help", "version"];

/// Parse process arguments, program name first
pub fn parse_cli<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Cli::try_parse_from(normalize_flags(args))
}

/// Rewrite `-flag` and `-flag=value` to their `--` form for known long flags
pub fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let fixed = arg.to_str().and_then(single_dash_long);
            fixed.map(OsString::from).unwrap_or(arg)
        })
        .collect()
}

fn single_dash_long(arg: &str) -> Option<String> {
    let rest = arg.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&name).then(|| format!("-{arg}"))
}
