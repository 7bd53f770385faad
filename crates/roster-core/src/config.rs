//! Configuration management for Roster.
//!
//! Loads configuration from ${ROSTER_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for Roster configuration and data directories.
    //!
    //! ROSTER_HOME resolution order:
    //! 1. ROSTER_HOME environment variable (if set)
    //! 2. ~/.config/roster (default)
    //! 3. ./.roster when no home directory can be determined

    use std::path::PathBuf;

    use directories::BaseDirs;

    /// Returns the Roster home directory.
    pub fn roster_home() -> PathBuf {
        if let Ok(home) = std::env::var("ROSTER_HOME") {
            return PathBuf::from(home);
        }

        BaseDirs::new().map_or_else(
            || PathBuf::from(".roster"),
            |dirs| dirs.home_dir().join(".config").join("roster"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        roster_home().join("config.toml")
    }

    /// Returns the directory that holds log files.
    pub fn logs_dir() -> PathBuf {
        roster_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Endpoint returning the user directory as a JSON array.
    pub users_url: String,

    /// Timeout for one user-list request in seconds (0 disables).
    pub request_timeout_secs: u64,

    /// URL requested by the connectivity probe.
    pub probe_url: String,

    /// Seconds between connectivity probes.
    pub probe_interval_secs: u64,

    /// Minimum password length accepted by the login form.
    pub min_password_len: usize,

    /// Default tracing filter when ROSTER_LOG is unset.
    pub log_level: String,
}

impl Config {
    pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";
    pub const DEFAULT_PROBE_URL: &str = "https://clients3.google.com/generate_204";
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
    const DEFAULT_PROBE_INTERVAL_SECS: u64 = 5;
    const DEFAULT_MIN_PASSWORD_LEN: usize = 6;
    const DEFAULT_LOG_LEVEL: &str = "info";
    /// Probes never run more often than this.
    const MIN_PROBE_INTERVAL_SECS: u64 = 1;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?
        } else {
            Config::default()
        };
        config
            .validate()
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        Ok(config)
    }

    /// Checks that URL fields parse as absolute http(s) URLs.
    pub fn validate(&self) -> Result<()> {
        check_http_url("users_url", &self.users_url)?;
        check_http_url("probe_url", &self.probe_url)?;
        Ok(())
    }

    /// Returns the user-list request timeout, or None if disabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        if self.request_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.request_timeout_secs))
        }
    }

    /// Returns the interval between connectivity probes.
    pub fn probe_interval(&self) -> Duration {
        Duration::from_secs(self.probe_interval_secs.max(Self::MIN_PROBE_INTERVAL_SECS))
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            users_url: Self::DEFAULT_USERS_URL.to_string(),
            request_timeout_secs: Self::DEFAULT_REQUEST_TIMEOUT_SECS,
            probe_url: Self::DEFAULT_PROBE_URL.to_string(),
            probe_interval_secs: Self::DEFAULT_PROBE_INTERVAL_SECS,
            min_password_len: Self::DEFAULT_MIN_PASSWORD_LEN,
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Checks that `value` is an absolute http(s) URL. `field` names it in errors.
pub fn check_http_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).with_context(|| format!("{field} is not a valid URL: {value}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("{field} must use http or https, got {}", url.scheme());
    }
    Ok(())
}
