//! Configuration schema.

use std::path::PathBuf;

use serde::Deserialize;

use crate::{ConfigError, ConfigResult};

/// Default report width in columns.
pub const DEFAULT_WIDTH: usize = 60;

/// Default lookback window in months.
pub const DEFAULT_MONTHS: u32 = 3;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Repository paths, in report order. A leading `~` is the home directory.
    pub repos: Vec<String>,

    /// Author filter. Empty means every author.
    #[serde(default)]
    pub user: Option<String>,

    /// Report width in columns.
    #[serde(default = "default_width")]
    pub width: usize,

    /// Lookback window in months.
    #[serde(default = "default_months")]
    pub months: u32,

    /// What to do when fetching one repository fails.
    #[serde(default)]
    pub on_fetch_error: FetchErrorPolicy,
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}

fn default_months() -> u32 {
    DEFAULT_MONTHS
}

/// Handling of a repository whose log cannot be fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchErrorPolicy {
    /// Stop the run with the error.
    #[default]
    Abort,

    /// Log the error and continue with the next repository.
    Skip,
}

/// Values set on the command line. `None` leaves the configured value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Author filter.
    pub user: Option<String>,

    /// Report width.
    pub width: Option<usize>,

    /// Lookback window.
    pub months: Option<u32>,

    /// Fetch failure policy.
    pub on_fetch_error: Option<FetchErrorPolicy>,
}

impl Config {
    /// Creates a configuration for the given repositories with default settings.
    #[must_use]
    pub fn new(repos: Vec<String>) -> Self {
        Self {
            repos,
            user: None,
            width: DEFAULT_WIDTH,
            months: DEFAULT_MONTHS,
            on_fetch_error: FetchErrorPolicy::default(),
        }
    }

    /// Applies command-line overrides and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged configuration is invalid.
    pub fn apply(mut self, overrides: Overrides) -> ConfigResult<Self> {
        if let Some(user) = overrides.user {
            self.user = Some(user);
        }
        if let Some(width) = overrides.width {
            self.width = width;
        }
        if let Some(months) = overrides.months {
            self.months = months;
        }
        if let Some(policy) = overrides.on_fetch_error {
            self.on_fetch_error = policy;
        }

        self.validate()?;
        Ok(self)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` leaves no room for wrapped text or
    /// `months` is zero.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width <= 3 {
            return Err(ConfigError::Invalid(format!(
                "width must be greater than 3, got {}",
                self.width
            )));
        }
        if self.months == 0 {
            return Err(ConfigError::Invalid(
                "months must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the author filter, treating a blank value as no filter.
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.user
            .as_deref()
            .map(str::trim)
            .filter(|user| !user.is_empty())
    }

    /// Returns the repository paths with the home shorthand expanded.
    #[must_use]
    pub fn repo_paths(&self) -> Vec<PathBuf> {
        self.repos.iter().map(|repo| expand_home(repo)).collect()
    }
}

/// Expands a leading `~` to the current user's home directory.
///
/// Paths without the shorthand, and all paths when the home directory is
/// unknown, are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };

    if path == "~" {
        return home;
    }
    match path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let config: Config = toml::from_str(r#"repos = ["/work/api"]"#).unwrap();
        assert_eq!(config.repos, vec!["/work/api".to_string()]);
        assert_eq!(config.user, None);
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.months, DEFAULT_MONTHS);
        assert_eq!(config.on_fetch_error, FetchErrorPolicy::Abort);
    }

    #[test]
    fn test_deserialize_full() {
        let toml = r#"
            repos = ["~/src/api", "/work/web"]
            user = "Ian"
            width = 80
            months = 6
            on_fetch_error = "skip"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.repos.len(), 2);
        assert_eq!(config.user.as_deref(), Some("Ian"));
        assert_eq!(config.width, 80);
        assert_eq!(config.months, 6);
        assert_eq!(config.on_fetch_error, FetchErrorPolicy::Skip);
    }

    #[test]
    fn test_deserialize_missing_repos() {
        let result: Result<Config, _> = toml::from_str(r#"user = "Ian""#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("repos"));
    }

    #[test]
    fn test_deserialize_unknown_key() {
        let result: Result<Config, _> = toml::from_str("repos = []\ncolour = true");
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_bad_policy() {
        let result: Result<Config, _> = toml::from_str("repos = []\non_fetch_error = \"retry\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_overrides_win() {
        let mut config = Config::new(vec!["/a".to_string()]);
        config.user = Some("Config User".to_string());
        config.width = 70;

        let merged = config
            .apply(Overrides {
                user: Some("Cli User".to_string()),
                width: Some(100),
                months: Some(12),
                on_fetch_error: Some(FetchErrorPolicy::Skip),
            })
            .unwrap();

        assert_eq!(merged.user.as_deref(), Some("Cli User"));
        assert_eq!(merged.width, 100);
        assert_eq!(merged.months, 12);
        assert_eq!(merged.on_fetch_error, FetchErrorPolicy::Skip);
    }

    #[test]
    fn test_apply_unset_keeps_config() {
        let mut config = Config::new(vec!["/a".to_string()]);
        config.user = Some("Config User".to_string());
        config.width = 70;

        let merged = config.clone().apply(Overrides::default()).unwrap();
        assert_eq!(merged, config);
    }

    #[test]
    fn test_apply_explicit_default_value() {
        let mut config = Config::new(vec!["/a".to_string()]);
        config.width = 70;

        let merged = config
            .apply(Overrides {
                width: Some(DEFAULT_WIDTH),
                ..Overrides::default()
            })
            .unwrap();
        assert_eq!(merged.width, DEFAULT_WIDTH);
    }

    #[test]
    fn test_apply_rejects_invalid_width() {
        let result = Config::new(vec![]).apply(Overrides {
            width: Some(3),
            ..Overrides::default()
        });
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_months() {
        let mut config = Config::new(vec![]);
        config.months = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_author() {
        let mut config = Config::new(vec![]);
        assert_eq!(config.author(), None);

        config.user = Some("   ".to_string());
        assert_eq!(config.author(), None);

        config.user = Some(" Ian ".to_string());
        assert_eq!(config.author(), Some("Ian"));
    }

    #[test]
    fn test_expand_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };

        assert_eq!(expand_home("~"), home);
        assert_eq!(expand_home("~/src/api"), home.join("src/api"));
        assert_eq!(expand_home("/work/api"), PathBuf::from("/work/api"));
        assert_eq!(expand_home("~other/api"), PathBuf::from("~other/api"));
        assert_eq!(expand_home("relative/~"), PathBuf::from("relative/~"));
    }

    #[test]
    fn test_repo_paths_keep_order() {
        let config = Config::new(vec!["/b".to_string(), "/a".to_string()]);
        assert_eq!(
            config.repo_paths(),
            vec![PathBuf::from("/b"), PathBuf::from("/a")]
        );
    }
}
