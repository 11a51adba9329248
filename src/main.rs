use std::process::ExitCode;

mod app;
mod logging;

/// Exit status for errors detected before any file is processed.
const STARTUP_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let args = exif_sort::cli::parse();
    match app::run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            app::report_startup_error(&e);
            ExitCode::from(STARTUP_FAILURE)
        }
    }
}
