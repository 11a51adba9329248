//! Core configuration types.
//! - Config is the immutable run description handed to the sorter.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::naming::NameFormat;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Run summary and warnings (default)
    #[default]
    Normal,
    /// Per-file decisions
    Info,
    /// Everything, including metadata probing
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory whose files are organized
    pub input_dir: PathBuf,
    /// Root of the date tree; defaults to `input_dir`
    pub output_dir: PathBuf,
    /// Walk the whole subtree instead of direct children only
    pub recursive: bool,
    /// Base-name pattern for moved files
    pub format: NameFormat,
    /// Diagnostic verbosity
    pub log_level: LogLevel,
    /// Optional file receiving a copy of the diagnostics
    pub log_file: Option<PathBuf>,
    /// Emit diagnostics as JSON
    pub json: bool,
}

impl Config {
    /// Config for `input_dir` with output into the same tree and default settings.
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        let input_dir = input_dir.into();
        Self {
            output_dir: input_dir.clone(),
            input_dir,
            recursive: false,
            format: NameFormat::default(),
            log_level: LogLevel::default(),
            log_file: None,
            json: false,
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_format(mut self, format: NameFormat) -> Self {
        self.format = format;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
