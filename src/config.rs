//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub clock: ClockConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the content document comes from
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    /// Page location: a URL (`https://host/site/`) or a local directory
    #[serde(default = "default_base")]
    pub base: String,

    /// Document path relative to the page
    #[serde(default = "default_content_path")]
    pub path: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base() -> String {
    ".".to_string()
}

fn default_content_path() -> String {
    crate::content::CONTENT_PATH.to_string()
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            path: default_content_path(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Clock display configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClockConfig {
    /// IANA timezone name
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Hours added to UTC when the timezone cannot be resolved
    #[serde(default = "default_fallback_offset")]
    pub fallback_offset_hours: i64,

    /// strftime pattern
    #[serde(default = "default_clock_format")]
    pub format: String,

    #[serde(default = "default_clock_interval")]
    pub interval_secs: u64,

    /// Shown when a tick cannot be formatted
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// UI target the clock writes into
    #[serde(default = "default_clock_target")]
    pub target: String,
}

fn default_timezone() -> String {
    "America/Panama".to_string()
}

fn default_fallback_offset() -> i64 {
    -5
}

fn default_clock_format() -> String {
    "%H:%M".to_string()
}

fn default_clock_interval() -> u64 {
    30
}

fn default_placeholder() -> String {
    "--:--".to_string()
}

fn default_clock_target() -> String {
    crate::page::catalogue::CLOCK.to_string()
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            fallback_offset_hours: default_fallback_offset(),
            format: default_clock_format(),
            interval_secs: default_clock_interval(),
            placeholder: default_placeholder(),
            target: default_clock_target(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("redlev").join("config.toml")),
            Some(PathBuf::from("./redlev.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(base) = var("REDLEV_CONTENT_BASE") {
            self.content.base = base;
        }
        if let Some(timeout) = var("REDLEV_REQUEST_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.content.request_timeout_secs = t;
            }
        }

        if let Some(tz) = var("REDLEV_CLOCK_TIMEZONE") {
            self.clock.timezone = tz;
        }

        if let Some(level) = var("REDLEV_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("REDLEV_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# REDLEV site renderer configuration
#
# Environment variables override these settings:
# - REDLEV_CONTENT_BASE
# - REDLEV_REQUEST_TIMEOUT_SECS
# - REDLEV_CLOCK_TIMEZONE
# - REDLEV_LOG_LEVEL
# - REDLEV_LOG_FORMAT

[content]
# Page location the content document is resolved against:
# a URL (https://example.org/) or a local directory
base = "."

# Content document path relative to the page
path = "data/content.json"

# Request timeout in seconds
request_timeout_secs = 10

[clock]
# IANA timezone shown by the clock
timezone = "America/Panama"

# Hours added to UTC if the timezone cannot be resolved
fallback_offset_hours = -5

# strftime pattern; "%H:%M:%S" adds seconds (use a shorter interval too)
format = "%H:%M"

# Refresh interval in seconds
interval_secs = 30

# Shown when a tick cannot be formatted
placeholder = "--:--"

# Page element the clock writes into
target = "panamaClock"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.content.path, "data/content.json");
        assert_eq!(config.clock.timezone, "America/Panama");
        assert_eq!(config.clock.fallback_offset_hours, -5);
        assert_eq!(config.clock.interval_secs, 30);
        assert_eq!(config.clock.target, "panamaClock");
    }

    #[test]
    fn test_default_config_file_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.content.base, ".");
        assert_eq!(config.clock.format, "%H:%M");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_file() {
        let config = Config::parse("[content]\nbase = \"https://redlev.org/\"\n").unwrap();
        assert_eq!(config.content.base, "https://redlev.org/");
        assert_eq!(config.content.request_timeout_secs, 10);
        assert_eq!(config.clock.placeholder, "--:--");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("REDLEV_CONTENT_BASE", "./public"),
            ("REDLEV_REQUEST_TIMEOUT_SECS", "not-a-number"),
            ("REDLEV_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.content.base, "./public");
        assert_eq!(config.content.request_timeout_secs, 10);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.clock.timezone, "America/Panama");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[clock\n").unwrap();
        assert!(matches!(Config::load(&bad), Err(ConfigError::Parse { .. })));
    }
}
