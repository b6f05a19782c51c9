use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

const UNIT_SYSTEMS: [&str; 3] = ["metric", "imperial", "standard"];

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/apiscope/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("apiscope").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Timeouts and page size are non-zero
    /// - Every base URL is set
    /// - The weather unit system is one OpenWeatherMap understands
    /// - The default movie query is not blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.timeout_seconds == 0 || self.http.connect_timeout_seconds == 0 {
            return Err(invalid("HTTP timeouts must be greater than zero"));
        }

        if self.dogs.images_per_page == 0 {
            return Err(invalid("dogs.images_per_page must be greater than zero"));
        }

        for (section, url) in [
            ("weather", &self.weather.base_url),
            ("dogs", &self.dogs.base_url),
            ("movies", &self.movies.base_url),
        ] {
            if url.trim().is_empty() {
                return Err(invalid(format!("{section}.base_url must not be empty")));
            }
        }

        if !UNIT_SYSTEMS.contains(&self.weather.units.as_str()) {
            return Err(invalid(format!(
                "Unknown weather.units '{}' (expected one of: {})",
                self.weather.units,
                UNIT_SYSTEMS.join(", ")
            )));
        }

        if self.movies.default_query.trim().is_empty() {
            return Err(invalid("movies.default_query must not be blank"));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        message: message.into(),
    }
}
