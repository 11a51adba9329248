//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - The single-dash long forms `-in` and `-out` are rewritten to `--input-dir`/`--output-dir`
//!   before clap sees them.
//! - --debug is a shorthand for --log-level debug.
//! - Missing input dir is reported by the app (with help), not by clap.

use clap::{CommandFactory, Parser, ValueHint};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};
use crate::config::xml::FileSettings;
use crate::errors::ExifSortError;
use crate::naming::NameFormat;

/// Sort photos into a year/month/day tree named after their capture time.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone, Default)]
#[command(
    author,
    version,
    about = "Sort photos into year/month/day folders named after their capture time"
)]
pub struct Args {
    /// Directory holding the photos to sort (also accepted as `-in DIR`).
    #[arg(long = "input-dir", value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub input_dir: Option<PathBuf>,

    /// Root of the date tree; defaults to the input directory (also `-out DIR`).
    #[arg(long = "output-dir", value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub output_dir: Option<PathBuf>,

    /// File name pattern, e.g. yyyyMMdd_HHmmss or %Y%m%d_%H%M%S.
    #[arg(short = 'f', long, value_name = "PATTERN")]
    pub format: Option<String>,

    /// Walk subdirectories too.
    #[arg(short = 'R', long)]
    pub recursive: bool,

    /// Read settings from this XML file instead of the default location.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, value_name = "LEVEL", help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<LogLevel>,

    /// Also append diagnostics to this file.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level
    }

    /// Build the run configuration: file settings first, CLI flags on top.
    pub fn to_config(&self, file: Option<&FileSettings>) -> Result<Config, ExifSortError> {
        let input_dir = self
            .input_dir
            .clone()
            .ok_or(ExifSortError::MissingInputDir)?;
        let mut cfg = Config::new(input_dir);

        if let Some(file) = file {
            if let Some(out) = &file.output_dir {
                cfg.output_dir = out.clone();
            }
            // a file pattern shadowed by -f is never parsed
            if let Some(pattern) = file.format.as_ref().filter(|_| self.format.is_none()) {
                cfg.format = NameFormat::parse(pattern)?;
            }
            if let Some(recursive) = file.recursive {
                cfg.recursive = recursive;
            }
            if let Some(level) = file.log_level {
                cfg.log_level = level;
            }
            if let Some(path) = &file.log_file {
                cfg.log_file = Some(path.clone());
            }
        }

        self.apply_overrides(&mut cfg)?;
        Ok(cfg)
    }

    /// Apply CLI overrides to a Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) -> Result<(), ExifSortError> {
        if let Some(out) = &self.output_dir {
            cfg.output_dir = out.clone();
        }
        if let Some(pattern) = &self.format {
            cfg.format = NameFormat::parse(pattern)?;
        }
        if self.recursive {
            cfg.recursive = true;
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(path) = &self.log_file {
            cfg.log_file = Some(path.clone());
        }
        if self.json {
            cfg.json = true;
        }
        Ok(())
    }

    /// Rendered `--help` text, printed after startup errors.
    pub fn help_text() -> String {
        Args::command().render_help().to_string()
    }
}

/// Rewrite `-in`/`-out` (and their `=` forms) to the long flags clap understands.
pub fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut after_separator = false;
    args.into_iter()
        .map(|arg| {
            if after_separator {
                return arg;
            }
            let Some(s) = arg.to_str() else {
                return arg;
            };
            if s == "--" {
                after_separator = true;
                return arg;
            }
            for (short, long) in [("-in", "--input-dir"), ("-out", "--output-dir")] {
                if s == short {
                    return OsString::from(long);
                }
                if let Some(value) = s.strip_prefix(short).and_then(|rest| rest.strip_prefix('=')) {
                    return OsString::from(format!("{long}={value}"));
                }
            }
            arg
        })
        .collect()
}

/// Parse from an explicit argument list (first item is the program name).
pub fn try_parse_from<I>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = OsString>,
{
    Args::try_parse_from(normalize_legacy_flags(args))
}

pub fn parse() -> Args {
    Args::parse_from(normalize_legacy_flags(std::env::args_os()))
}
