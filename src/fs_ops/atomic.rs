//! Atomic rename helper.
//! - Plain rename; never removes an existing destination first.
//! - On Unix, best-effort fsync of the destination directory after the rename.

use std::fs;
use std::io;
use std::path::Path;

/// Rename `src` onto `dst`. Returns the raw io::Error so callers can detect EXDEV.
pub(super) fn try_atomic_move(src: &Path, dst: &Path) -> io::Result<()> {
    fs::rename(src, dst)?;

    #[cfg(unix)]
    if let Some(parent) = dst.parent() {
        // a failed fsync must not turn a completed rename into a failure
        let _ = super::util::fsync_dir(parent);
    }

    Ok(())
}
