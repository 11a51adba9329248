//! Destination naming: base-name patterns and the date tree layout.

mod destination;
mod format;

pub use destination::{
    collision_destination, extension_of, name_destination, primary_destination, Destination,
    DUPLICATES_DIR,
};
pub use format::{NameFormat, DEFAULT_NAME_FORMAT};
