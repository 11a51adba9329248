//! XML configuration support.
//! - Reads optional settings from config.xml (quick_xml + serde).
//! - The file is never created or rewritten.
//! - Unknown elements and unparsable values are startup errors.

use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::ExifSortError;

use super::paths::{locate_config, ConfigLocation};
use super::types::LogLevel;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "output_dir")]
    output_dir: Option<String>,
    #[serde(rename = "format")]
    format: Option<String>,
    #[serde(rename = "recursive")]
    recursive: Option<String>,
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
}

/// Settings read from a config file; every field is optional and CLI flags win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSettings {
    pub output_dir: Option<PathBuf>,
    pub format: Option<String>,
    pub recursive: Option<bool>,
    pub log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Parse XML text into settings. `path` is only used in error messages.
pub fn parse_settings(contents: &str, path: &Path) -> Result<FileSettings, ExifSortError> {
    let malformed = |reason: String| ExifSortError::ConfigMalformed {
        path: path.to_path_buf(),
        reason,
    };

    let parsed: XmlConfig = from_xml_str(contents).map_err(|e| malformed(e.to_string()))?;

    let recursive = match non_empty(parsed.recursive) {
        Some(v) => Some(
            parse_bool(&v).ok_or_else(|| malformed(format!("recursive must be true or false, got '{v}'")))?,
        ),
        None => None,
    };
    let log_level = match non_empty(parsed.log_level) {
        Some(v) => Some(v.parse::<LogLevel>().map_err(malformed)?),
        None => None,
    };

    Ok(FileSettings {
        output_dir: non_empty(parsed.output_dir).map(PathBuf::from),
        format: non_empty(parsed.format),
        recursive,
        log_level,
        log_file: non_empty(parsed.log_file).map(PathBuf::from),
    })
}

/// Load settings from a specific XML file.
pub fn load_settings_from_xml_path(path: &Path) -> Result<FileSettings, ExifSortError> {
    let contents = fs::read_to_string(path).map_err(|e| ExifSortError::ConfigUnreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let settings = parse_settings(&contents, path)?;
    debug!(path = %path.display(), "Loaded config file");
    Ok(settings)
}

/// Locate and load the config file, if any.
/// Returns Ok(None) when no file applies; an explicit `--config` file must exist.
pub fn load_settings(explicit: Option<&Path>) -> Result<Option<FileSettings>, ExifSortError> {
    let Some(location) = locate_config(explicit) else {
        return Ok(None);
    };

    match fs::metadata(location.path()) {
        Ok(_) => load_settings_from_xml_path(location.path()).map(Some),
        Err(e) if e.kind() == io::ErrorKind::NotFound && !location.is_required() => {
            if let ConfigLocation::Env(p) = &location {
                debug!(path = %p.display(), "Config file named by environment does not exist");
            }
            Ok(None)
        }
        Err(e) => Err(ExifSortError::ConfigUnreadable {
            path: location.path().to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Result<FileSettings, ExifSortError> {
        parse_settings(xml, Path::new("config.xml"))
    }

    #[test]
    fn reads_all_fields_trimmed() {
        let s = parse(
            "<config>\n  <output_dir> /photos/sorted </output_dir>\n  <format>yyyy-MM-dd</format>\n  <recursive> true </recursive>\n  <log_level>debug</log_level>\n  <log_file>/tmp/exif_sort.log</log_file>\n</config>",
        )
        .unwrap();
        assert_eq!(s.output_dir, Some(PathBuf::from("/photos/sorted")));
        assert_eq!(s.format.as_deref(), Some("yyyy-MM-dd"));
        assert_eq!(s.recursive, Some(true));
        assert_eq!(s.log_level, Some(LogLevel::Debug));
        assert_eq!(s.log_file, Some(PathBuf::from("/tmp/exif_sort.log")));
    }

    #[test]
    fn empty_elements_are_absent() {
        let s = parse("<config><output_dir>  </output_dir><log_file></log_file></config>").unwrap();
        assert_eq!(s, FileSettings::default());
    }

    #[test]
    fn unknown_element_is_rejected() {
        let err = parse("<config><dry_run>true</dry_run></config>").unwrap_err();
        assert!(matches!(err, ExifSortError::ConfigMalformed { .. }));
    }

    #[test]
    fn bad_bool_is_rejected() {
        let err = parse("<config><recursive>sometimes</recursive></config>").unwrap_err();
        assert!(err.to_string().contains("sometimes"));
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let err = parse("<config><log_level>loud</log_level></config>").unwrap_err();
        assert!(matches!(err, ExifSortError::ConfigMalformed { .. }));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let td = tempfile::tempdir().unwrap();
        let missing = td.path().join("nope.xml");
        let err = load_settings(Some(&missing)).unwrap_err();
        assert!(matches!(err, ExifSortError::ConfigUnreadable { .. }));
    }
}
