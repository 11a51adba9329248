//! Safe copy-and-rename, used when a rename would cross filesystems:
//! - copy into a hidden temp file in the destination directory (never clobbers)
//! - carry mtime/atime and permissions over from the source
//! - refuse if the destination appeared meanwhile, else rename temp -> dest
//! - the source is left in place; the caller removes it

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;

use crate::errors::ExifSortError;

use super::atomic::try_atomic_move;
use super::helpers::io_error_with_help;
use super::{io_copy, meta, util};

pub fn safe_copy_and_rename(src: &Path, dest: &Path) -> Result<()> {
    let dest_dir = dest
        .parent()
        .ok_or_else(|| anyhow!("destination has no parent: {}", dest.display()))?;

    let src_meta = fs::metadata(src).map_err(io_error_with_help("stat source", src))?;
    let tmp_path = util::unique_temp_path(dest_dir);

    let finish = || -> Result<()> {
        io_copy::copy_streaming(src, &tmp_path)
            .map_err(io_error_with_help("copy to temporary file", &tmp_path))?;
        meta::preserve_times_and_permissions(&src_meta, &tmp_path)?;
        if fs::symlink_metadata(dest).is_ok() {
            return Err(ExifSortError::DestinationExists(dest.to_path_buf()).into());
        }
        try_atomic_move(&tmp_path, dest).with_context(|| {
            format!(
                "rename temporary file '{}' -> '{}'",
                tmp_path.display(),
                dest.display()
            )
        })
    };

    if let Err(e) = finish() {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetime::{set_file_mtime, FileTime};
    use tempfile::tempdir;

    #[test]
    fn copies_content_and_mtime_leaves_source() {
        let td = tempdir().unwrap();
        let src = td.path().join("a.jpg");
        let dest = td.path().join("out.jpg");
        fs::write(&src, b"pixels").unwrap();
        set_file_mtime(&src, FileTime::from_unix_time(1_600_000_000, 0)).unwrap();

        safe_copy_and_rename(&src, &dest).unwrap();

        assert!(src.exists());
        assert_eq!(fs::read(&dest).unwrap(), b"pixels");
        let mt = FileTime::from_last_modification_time(&fs::metadata(&dest).unwrap());
        assert_eq!(mt.unix_seconds(), 1_600_000_000);
    }

    #[test]
    fn refuses_existing_destination_and_cleans_temp() {
        let td = tempdir().unwrap();
        let src = td.path().join("a.jpg");
        let dest = td.path().join("taken.jpg");
        fs::write(&src, b"new").unwrap();
        fs::write(&dest, b"old").unwrap();

        let err = safe_copy_and_rename(&src, &dest).unwrap_err();
        assert!(err.downcast_ref::<ExifSortError>().is_some());
        assert_eq!(fs::read(&dest).unwrap(), b"old");

        let leftovers: Vec<_> = fs::read_dir(td.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with(".exif_sort."))
            .collect();
        assert!(leftovers.is_empty(), "temp file left behind");
    }

    #[test]
    fn failed_copy_leaves_no_temp_file() {
        let td = tempdir().unwrap();
        let src = td.path().join("not_a_file");
        fs::create_dir(&src).unwrap();
        let out = td.path().join("out");
        fs::create_dir(&out).unwrap();
        let dest = out.join("x.jpg");

        assert!(safe_copy_and_rename(&src, &dest).is_err());
        assert!(!dest.exists());
        let leftovers: Vec<_> = fs::read_dir(&out).unwrap().filter_map(Result::ok).collect();
        assert!(leftovers.is_empty(), "temp file left behind: {leftovers:?}");
    }
}
