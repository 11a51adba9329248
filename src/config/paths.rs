//! Config file location and symlink checks.
//! Determines where settings are read from and detects symlinked ancestors of the log path.

use dirs::config_dir;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "EXIF_SORT_CONFIG";

/// How a config file was located; decides whether a missing file is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    /// `--config <FILE>`: must exist.
    Flag(PathBuf),
    /// `$EXIF_SORT_CONFIG`: missing means no config.
    Env(PathBuf),
    /// OS config directory: missing means no config.
    Default(PathBuf),
}

impl ConfigLocation {
    pub fn path(&self) -> &Path {
        match self {
            ConfigLocation::Flag(p) | ConfigLocation::Env(p) | ConfigLocation::Default(p) => p,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, ConfigLocation::Flag(_))
    }
}

/// OS-appropriate default config path.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(mut base) = config_dir() {
        base.push("exif_sort");
        base.push("config.xml");
        Some(base)
    } else {
        env::var("HOME").ok().map(|h| {
            PathBuf::from(h)
                .join(".config")
                .join("exif_sort")
                .join("config.xml")
        })
    }
}

/// Pick the config file: explicit flag, else env var, else the default path.
pub fn locate_config(explicit: Option<&Path>) -> Option<ConfigLocation> {
    if let Some(p) = explicit {
        return Some(ConfigLocation::Flag(p.to_path_buf()));
    }
    if let Some(p) = env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        return Some(ConfigLocation::Env(PathBuf::from(p)));
    }
    default_config_path().map(ConfigLocation::Default)
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        match fs::symlink_metadata(anc) {
            Ok(meta) if meta.file_type().is_symlink() => return Ok(true),
            Ok(_) => {}
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) => {}
            Err(e) => return Err(e),
        }
        p = anc.parent();
    }
    Ok(false)
}
