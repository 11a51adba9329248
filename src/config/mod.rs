//! Config module.
//! Provides the run configuration, the config file location, XML loading, and validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{
    default_config_path, locate_config, path_has_symlink_ancestor, ConfigLocation, CONFIG_ENV_VAR,
};
pub use types::{Config, LogLevel};
pub use xml::{load_settings, load_settings_from_xml_path, FileSettings};
