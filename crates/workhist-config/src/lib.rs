//! Configuration management for Workhist.
//!
//! This crate handles loading and validating the `workhist.toml` configuration
//! file and layering command-line overrides on top of it.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, default_config_path, load_config};
pub use schema::{
    Config, DEFAULT_MONTHS, DEFAULT_WIDTH, FetchErrorPolicy, Overrides, expand_home,
};
