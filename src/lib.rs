//! Core library for `exif_sort`.
//!
//! Moves photos into a `<year>/<month>/<day>` tree under an output root, naming each file
//! after its capture time: EXIF DateTimeOriginal when present, else the modification time.
//! A name that is already taken sends the file to `<year>/duplicates/<month>/<day>` with a
//! millisecond suffix.
//!
//! The pieces compose through plain calls:
//! `FileWalk` -> `capture_time` -> `name_destination` -> `move_file`, driven by `Sorter`.

pub mod capture;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod naming;
pub mod output;
pub mod platform;
pub mod sorter;
pub mod walk;

pub use capture::{
    capture_time, extract_capture_time, resolve_capture_time, CaptureTimestamp, TimestampSource,
};
pub use config::{
    default_config_path, load_settings, path_has_symlink_ancestor, Config, FileSettings, LogLevel,
};
pub use errors::ExifSortError;
pub use fs_ops::move_file;
pub use naming::{name_destination, Destination, NameFormat, DEFAULT_NAME_FORMAT, DUPLICATES_DIR};
pub use sorter::{MoveOutcome, RunSummary, Sorter};
pub use walk::FileWalk;
