//! Configuration loader.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{Config, ConfigError, ConfigResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "workhist.toml";

/// Loads and validates configuration from the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, lacks the `repos`
/// key, or holds out-of-range values.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;

    if config.repos.is_empty() {
        warn!(?path, "no repositories configured");
    }

    Ok(config)
}

/// Returns the default configuration path: [`CONFIG_FILE_NAME`] next to the
/// running executable.
///
/// # Errors
///
/// Returns an error if the executable path cannot be determined.
pub fn default_config_path() -> ConfigResult<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(CONFIG_FILE_NAME))
}
