//! Directory traversal.
//! `FileWalk` describes which files a run visits; every `iter()` call starts a fresh walk.

use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Regular files under a root, flat or recursive.
#[derive(Debug, Clone)]
pub struct FileWalk {
    root: PathBuf,
    recursive: bool,
}

impl FileWalk {
    pub fn new(root: impl Into<PathBuf>, recursive: bool) -> Self {
        Self {
            root: root.into(),
            recursive,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    /// Lazily yield regular files, sorted by name within each directory.
    /// Symlinks are never followed; unreadable entries are logged and skipped.
    pub fn iter(&self) -> impl Iterator<Item = PathBuf> + use<> {
        let mut walker = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name();
        if !self.recursive {
            walker = walker.max_depth(1);
        }

        walker.into_iter().filter_map(|entry| match entry {
            Ok(e) if e.file_type().is_file() => Some(e.into_path()),
            Ok(_) => None,
            Err(err) => {
                let path = err.path().map(|p| p.display().to_string()).unwrap_or_default();
                warn!(path = %path, error = %err, "Skipping unreadable entry");
                None
            }
        })
    }
}
