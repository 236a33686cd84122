use clap::error::ErrorKind;
use clap::CommandFactory;
use region_annotator::cli::{parse_cli, Cli, Command};
use region_annotator::commands::{run_draw, run_vision};
use region_annotator::config::{AnnotatorConfig, DEFAULT_LOG_FILTER};
use std::process::ExitCode;
use text_detector::TextractDetector;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries detected text and usage
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = match parse_cli(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::InvalidSubcommand => {
            let _ = err.print();
            let _ = Cli::command().print_help();
            return ExitCode::FAILURE;
        }
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return ExitCode::FAILURE;
    };

    match run(command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> anyhow::Result<()> {
    let config = AnnotatorConfig::from_env()?;

    match command {
        Command::Vision(args) => {
            let level = config.text_level;
            let connect = || TextractDetector::from_env(level);
            let detections = run_vision(connect, &args, &config).await?;
            info!("Annotated {} detections into {}", detections.len(), args.out.display());
        }
        Command::Draw(args) => {
            let regions = run_draw(&args, &config)?;
            info!("Annotated {} regions into {}", regions, args.out.display());
        }
    }

    Ok(())
}
