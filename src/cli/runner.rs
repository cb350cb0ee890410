use tracing::info;
use tracing_subscriber::EnvFilter;

use logogrid::{ExtractParams, extract_grid_to_dir};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(debug: bool) -> Result<(), AppError> {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

/// Grid bounds are checked by the library once the source is loaded.
fn params_from_args(args: &CliArgs) -> ExtractParams {
    ExtractParams {
        rows: args.rows,
        cols: args.cols,
        tolerance: args.tolerance,
        padding: args.padding,
    }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log)?;

    let params = params_from_args(&args);
    info!("Input: {:?}", args.input);
    info!("Output directory: {:?}", args.output);

    let report = extract_grid_to_dir(&args.input, &args.output, &params, args.manifest)
        .map_err(AppError::from)?;

    info!("Extraction complete!");
    info!("Written: {}", report.files.len());
    info!("Empty cells: {}", report.empty);
    if let Some(manifest) = &report.manifest {
        info!("Manifest: {:?}", manifest);
    }

    Ok(())
}
