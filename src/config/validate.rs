//! Config validation logic.
//! Verifies the input directory exists and the output root is usable before any file is touched.

use std::fs;
use std::path::Path;
use tracing::{debug, error};

use crate::errors::ExifSortError;

use super::types::Config;

impl Config {
    /// Check the directories. The output root may be missing; it is created on demand.
    pub fn validate(&self) -> Result<(), ExifSortError> {
        ensure_input_dir(&self.input_dir)?;
        ensure_output_usable(&self.output_dir)?;

        debug!(
            input = %self.input_dir.display(),
            output = %self.output_dir.display(),
            recursive = self.recursive,
            format = %self.format,
            "Config validated"
        );
        Ok(())
    }

    /// Validate, then replace the input directory with its canonical form.
    /// The output root follows along when it was defaulted to the input.
    pub fn validate_and_normalize(&mut self) -> Result<(), ExifSortError> {
        self.validate()?;
        let same = self.output_dir == self.input_dir;
        if let Ok(real) = dunce::canonicalize(&self.input_dir) {
            self.input_dir = real;
        }
        if same {
            self.output_dir = self.input_dir.clone();
        } else if let Ok(real) = dunce::canonicalize(&self.output_dir) {
            self.output_dir = real;
        } else if self.output_dir.is_relative()
            && let Ok(cwd) = std::env::current_dir()
        {
            self.output_dir = cwd.join(&self.output_dir);
        }
        Ok(())
    }
}

fn ensure_input_dir(path: &Path) -> Result<(), ExifSortError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => {
            error!(path = %path.display(), "Input path is not a directory");
            Err(ExifSortError::InputNotDirectory(path.to_path_buf()))
        }
        Err(_) => {
            error!(path = %path.display(), "Input directory does not exist");
            Err(ExifSortError::InputNotFound(path.to_path_buf()))
        }
    }
}

fn ensure_output_usable(path: &Path) -> Result<(), ExifSortError> {
    match fs::metadata(path) {
        Ok(meta) if !meta.is_dir() => {
            error!(path = %path.display(), "Output path exists but is not a directory");
            Err(ExifSortError::OutputNotDirectory(path.to_path_buf()))
        }
        _ => Ok(()),
    }
}
