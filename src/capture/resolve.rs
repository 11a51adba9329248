//! Timestamp resolution: embedded capture time first, filesystem mtime second.

use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;
use std::time::SystemTime;
use tracing::{trace, warn};

use super::{extract_capture_time, CaptureTimestamp, TimestampSource};

/// Pick the authoritative timestamp for `path`. Never fails.
pub fn resolve_capture_time(path: &Path, extracted: Option<CaptureTimestamp>) -> CaptureTimestamp {
    if let Some(ts) = extracted {
        return ts;
    }

    let modified = fs::metadata(path).and_then(|m| m.modified());
    let time = match modified {
        Ok(t) => DateTime::<Local>::from(t),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "modification time unavailable; using epoch");
            DateTime::<Local>::from(SystemTime::UNIX_EPOCH)
        }
    };
    trace!(path = %path.display(), time = %time, "using modification time");
    CaptureTimestamp::new(time, TimestampSource::Modified)
}

/// Extract then resolve in one call.
pub fn capture_time(path: &Path) -> CaptureTimestamp {
    resolve_capture_time(path, extract_capture_time(path))
}
