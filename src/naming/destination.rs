//! Destination computation and collision handling.
//!
//! Layout:
//! - primary:   `<root>/<YYYY>/<MM>/<DD>/<name><ext>`
//! - collision: `<root>/<YYYY>/duplicates/<MM>/<DD>/<name><ext>_<millis>`
//!
//! Notes:
//! - Only one collision level is probed. The millisecond suffix is not re-checked; the mover
//!   refuses to overwrite, so a same-millisecond clash surfaces as a per-file failure.
//! - The existence check and the later move are separate operations; callers racing with
//!   other writers can still lose.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

use crate::capture::CaptureTimestamp;

use super::format::NameFormat;

/// Segment inserted under the year for collision paths.
pub const DUPLICATES_DIR: &str = "duplicates";

/// A computed target path for one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    path: PathBuf,
    collision: bool,
}

impl Destination {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when the primary candidate was occupied.
    pub fn is_collision(&self) -> bool {
        self.collision
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// Extension of `file_name`: everything from the last `.` (dot included), or empty.
/// A name whose only dot is the leading one (`.hidden`) is all extension.
pub fn extension_of(file_name: &OsStr) -> OsString {
    match Path::new(file_name).extension() {
        Some(ext) => {
            let mut out = OsString::from(".");
            out.push(ext);
            out
        }
        None if file_name.as_encoded_bytes().starts_with(b".") => file_name.to_os_string(),
        None => OsString::new(),
    }
}

fn date_segments(ts: &CaptureTimestamp) -> (String, String, String) {
    let t = ts.time();
    (
        t.format("%Y").to_string(),
        t.format("%m").to_string(),
        t.format("%d").to_string(),
    )
}

fn file_name_for(ts: &CaptureTimestamp, file_name: &OsStr, format: &NameFormat) -> OsString {
    let mut name = OsString::from(format.render(ts.time()));
    name.push(extension_of(file_name));
    name
}

/// Primary candidate; pure, no filesystem access.
pub fn primary_destination(
    ts: &CaptureTimestamp,
    output_root: &Path,
    file_name: &OsStr,
    format: &NameFormat,
) -> PathBuf {
    let (year, month, day) = date_segments(ts);
    output_root
        .join(year)
        .join(month)
        .join(day)
        .join(file_name_for(ts, file_name, format))
}

/// Collision candidate for a given millisecond suffix; pure, no filesystem access.
pub fn collision_destination(
    ts: &CaptureTimestamp,
    output_root: &Path,
    file_name: &OsStr,
    format: &NameFormat,
    millis: u128,
) -> PathBuf {
    let (year, month, day) = date_segments(ts);
    let mut name = file_name_for(ts, file_name, format);
    name.push(format!("_{millis}"));
    output_root
        .join(year)
        .join(DUPLICATES_DIR)
        .join(month)
        .join(day)
        .join(name)
}

/// Compute where a file captured at `ts` should go.
/// Falls back to the duplicates tree when anything already occupies the primary candidate,
/// including the source file itself. `Sorter` checks for that case first and leaves a file
/// already at its primary path alone, so it never reaches this fallback.
pub fn name_destination(
    ts: &CaptureTimestamp,
    output_root: &Path,
    file_name: &OsStr,
    format: &NameFormat,
) -> Destination {
    let primary = primary_destination(ts, output_root, file_name, format);
    if !entry_exists(&primary) {
        return Destination {
            path: primary,
            collision: false,
        };
    }

    let millis = current_millis();
    let path = collision_destination(ts, output_root, file_name, format, millis);
    debug!(occupied = %primary.display(), dest = %path.display(), "collision; using duplicates tree");
    Destination {
        path,
        collision: true,
    }
}

/// Existence without following symlinks; a dangling link still occupies the name.
fn entry_exists(p: &Path) -> bool {
    fs::symlink_metadata(p).is_ok()
}

fn current_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}
