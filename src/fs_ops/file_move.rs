//! File move implementation.
//! Ensures the destination directory, refuses to clobber, renames atomically and falls back
//! to copy + remove only when the rename would cross filesystems.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::errors::ExifSortError;

use super::atomic::try_atomic_move;
use super::copy::safe_copy_and_rename;
use super::helpers::io_error_with_help;
use super::util::is_cross_device;

/// Move `src` to exactly `dest`.
///
/// A failure to create the destination directory does not stop the attempt; if the move
/// then fails, the directory error is attached as context.
pub fn move_file(src: &Path, dest: &Path) -> Result<()> {
    let mkdir_err = dest.parent().and_then(|dir| ensure_dir(dir).err());

    match move_into_place(src, dest) {
        Ok(()) => Ok(()),
        Err(e) => match mkdir_err {
            Some(mkdir) => Err(e.context(format!("{mkdir:#}"))),
            None => Err(e),
        },
    }
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    match fs::create_dir_all(dir) {
        Ok(()) => {
            debug!(dir = %dir.display(), "Created destination directory");
            Ok(())
        }
        Err(e) => {
            let err = io_error_with_help("create destination directory", dir)(e);
            warn!(dir = %dir.display(), error = %err, "Could not create destination directory");
            Err(err)
        }
    }
}

fn move_into_place(src: &Path, dest: &Path) -> Result<()> {
    if fs::symlink_metadata(dest).is_ok() {
        return Err(ExifSortError::DestinationExists(dest.to_path_buf()).into());
    }

    match try_atomic_move(src, dest) {
        Ok(()) => {
            debug!(src = %src.display(), dest = %dest.display(), "Renamed file atomically");
            Ok(())
        }
        Err(e) if is_cross_device(&e) => {
            debug!(
                src = %src.display(),
                dest = %dest.display(),
                "Rename crosses filesystems; copying instead"
            );
            safe_copy_and_rename(src, dest)?;
            fs::remove_file(src)
                .map_err(io_error_with_help("remove source after copy", src))
                .with_context(|| format!("file was copied to '{}'", dest.display()))?;
            Ok(())
        }
        Err(e) => {
            let op = format!("move to '{}' from", dest.display());
            Err(io_error_with_help(&op, src)(e))
        }
    }
}
