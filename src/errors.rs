//! Typed error definitions for exif_sort.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExifSortError {
    #[error("Missing parameter input-dir!")]
    MissingInputDir,

    #[error("Directory {0} doesn't exist")]
    InputNotFound(PathBuf),

    #[error("Input path is not a directory: {0}")]
    InputNotDirectory(PathBuf),

    #[error("Output path exists but is not a directory: {0}")]
    OutputNotDirectory(PathBuf),

    #[error("Invalid format definition '{pattern}': {reason}")]
    InvalidFormat { pattern: String, reason: String },

    #[error("Cannot read config file {path}: {reason}")]
    ConfigUnreadable { path: PathBuf, reason: String },

    #[error("Malformed config file {path}: {reason}")]
    ConfigMalformed { path: PathBuf, reason: String },

    #[error("Destination already exists: {0}")]
    DestinationExists(PathBuf),
}

impl ExifSortError {
    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u16 {
        match self {
            ExifSortError::MissingInputDir => 10,
            ExifSortError::InputNotFound(_) => 11,
            ExifSortError::InputNotDirectory(_) => 12,
            ExifSortError::OutputNotDirectory(_) => 13,
            ExifSortError::InvalidFormat { .. } => 14,
            ExifSortError::ConfigUnreadable { .. } => 20,
            ExifSortError::ConfigMalformed { .. } => 21,
            ExifSortError::DestinationExists(_) => 30,
        }
    }

    /// Short machine-friendly kind label, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ExifSortError::MissingInputDir => "missing_input_dir",
            ExifSortError::InputNotFound(_) => "input_not_found",
            ExifSortError::InputNotDirectory(_) => "input_not_directory",
            ExifSortError::OutputNotDirectory(_) => "output_not_directory",
            ExifSortError::InvalidFormat { .. } => "invalid_format",
            ExifSortError::ConfigUnreadable { .. } => "config_unreadable",
            ExifSortError::ConfigMalformed { .. } => "config_malformed",
            ExifSortError::DestinationExists(_) => "destination_exists",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_include_paths() {
        let e = ExifSortError::InputNotFound(PathBuf::from("/no/such/dir"));
        assert_eq!(e.to_string(), "Directory /no/such/dir doesn't exist");
        assert_eq!(e.code(), 11);
        assert_eq!(e.kind(), "input_not_found");
    }

    #[test]
    fn invalid_format_mentions_pattern() {
        let e = ExifSortError::InvalidFormat {
            pattern: "yyyyQQ".into(),
            reason: "illegal pattern character 'Q'".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("yyyyQQ"));
        assert!(msg.contains("'Q'"));
    }
}
