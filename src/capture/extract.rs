//! EXIF capture-time extraction.
//!
//! Absence of metadata is the common case (videos, screenshots, stripped files), so
//! every failure here collapses to `None` and is only visible at trace level.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use exif::{Exif, In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::trace;

use super::{CaptureTimestamp, TimestampSource};

/// Read the EXIF `DateTimeOriginal` of `path`, interpreted in local time.
pub fn extract_capture_time(path: &Path) -> Option<CaptureTimestamp> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            trace!(path = %path.display(), error = %e, "cannot open for EXIF read");
            return None;
        }
    };

    let mut reader = BufReader::new(file);
    let exif = match Reader::new().read_from_container(&mut reader) {
        Ok(x) => x,
        Err(e) => {
            trace!(path = %path.display(), error = %e, "no readable EXIF block");
            return None;
        }
    };

    let naive = original_datetime(&exif);
    if naive.is_none() {
        trace!(path = %path.display(), "EXIF present but DateTimeOriginal missing or invalid");
    }
    naive.map(|n| CaptureTimestamp::from_local(n, TimestampSource::Embedded))
}

fn first_ascii(exif: &Exif, tag: Tag) -> Option<&[u8]> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match field.value {
        Value::Ascii(ref vec) => vec.first().map(Vec::as_slice),
        _ => None,
    }
}

fn original_datetime(exif: &Exif) -> Option<NaiveDateTime> {
    let raw = first_ascii(exif, Tag::DateTimeOriginal)?;
    let mut dt = exif::DateTime::from_ascii(raw).ok()?;

    if let Some(subsec) = first_ascii(exif, Tag::SubSecTimeOriginal) {
        // a bogus sub-second field must not discard a good main timestamp
        let _ = dt.parse_subsec(subsec);
    }

    to_naive(&dt)
}

fn to_naive(dt: &exif::DateTime) -> Option<NaiveDateTime> {
    let date = NaiveDate::from_ymd_opt(dt.year.into(), dt.month.into(), dt.day.into())?;
    let time = NaiveTime::from_hms_nano_opt(
        dt.hour.into(),
        dt.minute.into(),
        dt.second.into(),
        dt.nanosecond.unwrap_or(0),
    )?;
    Some(date.and_time(time))
}
