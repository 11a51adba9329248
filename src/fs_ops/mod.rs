//! Filesystem operations: placing a file at its computed destination.

mod atomic;
mod copy;
mod file_move;
mod helpers;
mod io_copy;
mod meta;
mod util;

pub use copy::safe_copy_and_rename;
pub use file_move::move_file;
pub use helpers::io_error_with_help;
