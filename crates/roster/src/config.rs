//! Configuration management for roster.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::loader::check_birthday_format;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "roster";

/// Default directory endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";

/// Number of records fetched per load.
pub const DEFAULT_BATCH_SIZE: usize = 12;

/// Largest batch the randomuser.me API will serve in one request.
const MAX_BATCH_SIZE: usize = 5000;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `ROSTER_`, sections separated by
///    a double underscore, e.g. `ROSTER_SOURCE__BATCH_SIZE=24`)
/// 2. TOML config file at `~/.config/roster/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory source configuration.
    pub source: SourceConfig,
    /// Presentation configuration.
    pub display: DisplayConfig,
}

/// Where and how the directory batch is fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Base URL of the directory API.
    pub endpoint: String,
    /// Number of records requested per load.
    pub batch_size: usize,
    /// Nationality filter passed as `nat`. Empty means any nationality.
    pub nationality: String,
    /// Seed for a reproducible batch.
    pub seed: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Presentation-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// chrono format string used for birthdays.
    pub birthday_format: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            nationality: "us".to_string(),
            seed: None,
            timeout_secs: 30,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            // en-US short date, e.g. 7/4/1984
            birthday_format: "%-m/%-d/%Y".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("ROSTER_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.source.endpoint).map_err(|e| {
            Error::config_validation(format!("invalid endpoint {}: {e}", self.source.endpoint))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config_validation(format!(
                "endpoint must use http or https, got {}",
                url.scheme()
            )));
        }

        if self.source.batch_size == 0 || self.source.batch_size > MAX_BATCH_SIZE {
            return Err(Error::config_validation(format!(
                "batch_size must be between 1 and {MAX_BATCH_SIZE}, got {}",
                self.source.batch_size
            )));
        }

        if self.source.timeout_secs == 0 {
            return Err(Error::config_validation(
                "timeout_secs must be greater than 0",
            ));
        }

        if self.display.birthday_format.trim().is_empty() {
            return Err(Error::config_validation("birthday_format must not be empty"));
        }
        if let Err(message) = check_birthday_format(&self.display.birthday_format) {
            return Err(Error::config_validation(format!(
                "invalid birthday_format: {message}"
            )));
        }

        Ok(())
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.source.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.source.batch_size, 12);
        assert_eq!(config.source.nationality, "us");
        assert!(config.source.seed.is_none());
        assert_eq!(config.display.birthday_format, "%-m/%-d/%Y");
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_batch_size() {
        let mut config = Config::default();
        config.source.batch_size = 0;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("batch_size"));
    }

    #[test]
    fn test_validate_oversized_batch() {
        let mut config = Config::default();
        config.source.batch_size = MAX_BATCH_SIZE + 1;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_invalid_endpoint() {
        let mut config = Config::default();
        config.source.endpoint = "not a url".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("invalid endpoint"));
    }

    #[test]
    fn test_validate_non_http_endpoint() {
        let mut config = Config::default();
        config.source.endpoint = "ftp://randomuser.me/api/".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("http or https"));
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = Config::default();
        config.source.timeout_secs = 0;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("timeout_secs"));
    }

    #[test]
    fn test_validate_empty_birthday_format() {
        let mut config = Config::default();
        config.display.birthday_format = "  ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_birthday_format() {
        let mut config = Config::default();
        config.display.birthday_format = "%Q".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("birthday_format"));
    }

    #[test]
    fn test_validate_rejects_time_in_birthday_format() {
        let mut config = Config::default();
        config.display.birthday_format = "%-m/%-d/%Y %H:%M".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("birthday_format"));
    }

    #[test]
    fn test_request_timeout() {
        let config = Config::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("roster"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let config = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[source]
batch_size = 24
seed = "abc"

[display]
birthday_format = "%Y-%m-%d"
"#
        )
        .unwrap();

        let config = Config::load_from(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.source.batch_size, 24);
        assert_eq!(config.source.seed.as_deref(), Some("abc"));
        assert_eq!(config.source.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.display.birthday_format, "%Y-%m-%d");
    }

    #[test]
    fn test_load_rejects_invalid_file_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[source]\nbatch_size = 0").unwrap();

        let result = Config::load_from(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(Error::ConfigValidation { .. })));
    }

    #[test]
    fn test_source_config_deserialize() {
        let json = r#"{"batch_size": 50, "nationality": "gb"}"#;
        let source: SourceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(source.batch_size, 50);
        assert_eq!(source.nationality, "gb");
        assert_eq!(source.timeout_secs, 30);
    }

    #[test]
    fn test_config_serialize() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("batch_size"));
        assert!(json.contains("birthday_format"));
    }
}
