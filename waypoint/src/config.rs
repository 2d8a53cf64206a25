//! Configuration schema and loading.
//!
//! Waypoint needs very little configuration: the navigation history window
//! size and an optional default log level. Both live in a small YAML file,
//! discovered at `~/.waypoint/config.yaml` unless overridden by the
//! `WAYPOINT_CONFIG` environment variable.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::logging::LogLevel;

/// Default bound on the navigation history window.
///
/// History keeps the most recent entries, oldest evicted first, and this is
/// the behavioral default; it is configurable via
/// [`Config::history_capacity`].
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Name of the environment variable that overrides config file discovery.
pub const CONFIG_PATH_ENV: &str = "WAYPOINT_CONFIG";

/// Waypoint configuration.
///
/// All fields are optional; absent fields fall back to built-in defaults.
///
/// # Examples
///
/// ```
/// use waypoint::Config;
///
/// let config = Config {
///     history_capacity: Some(25),
///     ..Default::default()
/// };
/// assert_eq!(config.effective_history_capacity(), 25);
/// assert_eq!(Config::default().effective_history_capacity(), 10);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum number of entries retained in navigation history.
    pub history_capacity: Option<usize>,

    /// Default log level ("quiet", "normal", or "verbose").
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from a YAML file.
    ///
    /// The loaded configuration is validated before being returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML for
    /// this schema, or fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Discover and load the user configuration.
    ///
    /// Checks `WAYPOINT_CONFIG` first, then `~/.waypoint/config.yaml`.
    /// A missing file is not an error — the defaults apply; a file that
    /// exists but cannot be parsed is.
    ///
    /// # Errors
    ///
    /// Returns an error if a discovered file cannot be read or parsed, or
    /// fails validation.
    pub fn discover() -> Result<Self> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Self::load(Path::new(&path));
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// The default user config location (`~/.waypoint/config.yaml`).
    ///
    /// Returns `None` when the home directory cannot be determined.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(".waypoint").join("config.yaml"))
    }

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `history_capacity` is zero or `log_level` is not
    /// a recognized level.
    pub fn validate(&self) -> Result<()> {
        if self.history_capacity == Some(0) {
            return Err(Error::Validation {
                field: "history_capacity".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if let Some(ref level) = self.log_level {
            level.parse::<LogLevel>()?;
        }

        Ok(())
    }

    /// The history window size with the default applied.
    #[must_use]
    pub fn effective_history_capacity(&self) -> usize {
        self.history_capacity.unwrap_or(DEFAULT_HISTORY_CAPACITY)
    }

    /// The configured log level with the default applied.
    ///
    /// Call [`validate`](Config::validate) first if the level string may be
    /// untrusted; unparsable values fall back to Normal here.
    #[must_use]
    pub fn effective_log_level(&self) -> LogLevel {
        self.log_level
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(LogLevel::Normal)
    }
}
