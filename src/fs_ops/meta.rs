//! Timestamp and permission carry-over for copied files.
//! A rename keeps these for free; the copy fallback has to restore them so the result
//! still looks moved (and a later run still sees the same mtime).

use anyhow::{Context, Result};
use filetime::{set_file_times, FileTime};
use std::fs::{self, Metadata};
use std::path::Path;

pub(super) fn preserve_times_and_permissions(src_meta: &Metadata, dest: &Path) -> Result<()> {
    let mtime = FileTime::from_last_modification_time(src_meta);
    let atime = FileTime::from_last_access_time(src_meta);
    set_file_times(dest, atime, mtime)
        .with_context(|| format!("set timestamps on {}", dest.display()))?;

    fs::set_permissions(dest, src_meta.permissions())
        .with_context(|| format!("set permissions on {}", dest.display()))?;

    Ok(())
}
