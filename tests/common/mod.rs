//! Shared fixtures for integration tests.
#![allow(dead_code)]

use chrono::{Local, TimeZone};
use filetime::{set_file_mtime, FileTime};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const TAG_EXIF_IFD_POINTER: u16 = 0x8769;
const TAG_DATETIME_ORIGINAL: u16 = 0x9003;
const TYPE_ASCII: u16 = 2;
const TYPE_LONG: u16 = 4;

/// Minimal JPEG whose EXIF block holds only DateTimeOriginal (`YYYY:MM:DD HH:MM:SS`).
pub fn jpeg_with_original(datetime: &str) -> Vec<u8> {
    let mut value = datetime.as_bytes().to_vec();
    value.push(0);

    let exif_ifd: u32 = 8 + 2 + 12 + 4;
    let data_offset = exif_ifd + 2 + 12 + 4;

    let mut tiff = b"II*\0".to_vec();
    tiff.extend(8u32.to_le_bytes());
    tiff.extend(1u16.to_le_bytes());
    tiff.extend(TAG_EXIF_IFD_POINTER.to_le_bytes());
    tiff.extend(TYPE_LONG.to_le_bytes());
    tiff.extend(1u32.to_le_bytes());
    tiff.extend(exif_ifd.to_le_bytes());
    tiff.extend(0u32.to_le_bytes());
    tiff.extend(1u16.to_le_bytes());
    tiff.extend(TAG_DATETIME_ORIGINAL.to_le_bytes());
    tiff.extend(TYPE_ASCII.to_le_bytes());
    tiff.extend((value.len() as u32).to_le_bytes());
    tiff.extend(data_offset.to_le_bytes());
    tiff.extend(0u32.to_le_bytes());
    tiff.extend(value);

    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend(((2 + 6 + tiff.len()) as u16).to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend(tiff);
    jpeg.extend([0xFF, 0xD9]);
    jpeg
}

/// Write a JPEG with an embedded capture time.
pub fn write_photo(dir: &Path, name: &str, datetime: &str) -> PathBuf {
    let p = dir.join(name);
    fs::write(&p, jpeg_with_original(datetime)).expect("write photo");
    p
}

/// Write a file without metadata whose mtime is the given local wall-clock time.
pub fn write_plain_with_mtime(
    dir: &Path,
    name: &str,
    (y, mo, d, h, mi, s): (i32, u32, u32, u32, u32, u32),
) -> PathBuf {
    let p = dir.join(name);
    fs::write(&p, b"no metadata here").expect("write file");
    let when = Local
        .with_ymd_and_hms(y, mo, d, h, mi, s)
        .earliest()
        .expect("valid local time");
    set_file_mtime(&p, FileTime::from_unix_time(when.timestamp(), 0)).expect("set mtime");
    p
}

/// Every regular file under `root`, relative, with `/` separators, sorted.
pub fn tree(root: &Path) -> Vec<String> {
    let mut out: Vec<String> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    out.sort();
    out
}

/// The binary, isolated from any user config file.
pub fn exif_sort_cmd(scratch: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("exif_sort"));
    cmd.env("EXIF_SORT_CONFIG", scratch.join("no-such-config.xml"));
    cmd
}
