//! Capture time discovery.
//! - `extract` reads the EXIF original date/time, if any.
//! - `resolve` falls back to the filesystem modification time.
//!
//! Both work in the local system time zone.

mod extract;
mod resolve;

#[cfg(test)]
pub(crate) mod testdata;

pub use extract::extract_capture_time;
pub use resolve::{capture_time, resolve_capture_time};

use chrono::{DateTime, Local, NaiveDateTime, TimeDelta, TimeZone};

/// Where a capture timestamp came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampSource {
    /// EXIF DateTimeOriginal embedded in the file.
    Embedded,
    /// Filesystem last-modified time.
    Modified,
}

impl TimestampSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimestampSource::Embedded => "exif",
            TimestampSource::Modified => "mtime",
        }
    }
}

/// The single authoritative timestamp computed for a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureTimestamp {
    time: DateTime<Local>,
    source: TimestampSource,
}

impl CaptureTimestamp {
    pub fn new(time: DateTime<Local>, source: TimestampSource) -> Self {
        Self { time, source }
    }

    /// Interpret a wall-clock time in the local zone.
    pub fn from_local(naive: NaiveDateTime, source: TimestampSource) -> Self {
        Self::new(local_from_naive(naive), source)
    }

    pub fn time(&self) -> &DateTime<Local> {
        &self.time
    }

    pub fn source(&self) -> TimestampSource {
        self.source
    }
}

/// Map a naive wall-clock time onto the local zone.
/// Ambiguous times (DST overlap) take the earlier instant; nonexistent times (DST gap)
/// are pushed forward by one hour.
pub(crate) fn local_from_naive(naive: NaiveDateTime) -> DateTime<Local> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .or_else(|| {
            naive
                .checked_add_signed(TimeDelta::hours(1))
                .and_then(|shifted| Local.from_local_datetime(&shifted).earliest())
        })
        .unwrap_or_else(|| Local.from_utc_datetime(&naive))
}
