//! Application orchestrator.
//! Loads/merges config, initializes logging, validates paths and runs the sorter.

use anyhow::Result;
use exif_sort::cli::Args;
use exif_sort::output as out;
use exif_sort::{load_settings, ExifSortError, RunSummary, Sorter};
use tracing::{debug, error, info};

use crate::logging::init_tracing;

/// Run the CLI application. Any error returned here happened before the first file was touched.
pub fn run(args: Args) -> Result<RunSummary> {
    // Build config (may read XML). CLI args override config values.
    let file_settings = load_settings(args.config.as_deref())?;
    let mut cfg = args.to_config(file_settings.as_ref())?;

    // Held until the run ends so the file appender flushes.
    let _guard = init_tracing(cfg.log_level, cfg.log_file.as_deref(), cfg.json)?;

    debug!("Starting exif_sort: {:?}", args);
    cfg.validate_and_normalize()?;
    info!(
        input = %cfg.input_dir.display(),
        output = %cfg.output_dir.display(),
        recursive = cfg.recursive,
        format = %cfg.format,
        "Sorting photos"
    );

    Ok(Sorter::new(&cfg).run())
}

/// Report a startup failure: the error, then the usage help.
pub fn report_startup_error(e: &anyhow::Error) {
    if let Some(known) = e.downcast_ref::<ExifSortError>() {
        error!(code = known.code(), kind = known.kind(), "{known}");
    } else {
        error!(error = %format!("{e:#}"), "Startup failed");
    }
    out::print_error(&format!("{e:#}"));
    eprintln!();
    eprintln!("{}", Args::help_text());
}
