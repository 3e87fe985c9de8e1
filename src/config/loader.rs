use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::counter::BoundedCounter;

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
    /// `<config_dir>/counter-app/config.toml`, falling back to the current
    /// directory if the platform has no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("counter-app").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads configuration from an explicitly named file.
    ///
    /// Unlike [`Config::load`], the file must exist: a missing file is a
    /// `ReadError`. The parsed config is validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
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

    /// Checks:
    /// - `min <= max`
    /// - the initial count lies in `[min, max]`
    /// - the tick rate is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build_counter()?;

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Builds the counter described by the `[counter]` section.
    pub fn build_counter(&self) -> Result<BoundedCounter, ConfigError> {
        let counter = &self.counter;
        BoundedCounter::new(counter.count, counter.min, counter.max)
            .map(|built| built.with_title(counter.title.clone()))
            .map_err(|err| ConfigError::ValidationError {
                message: err.to_string(),
            })
    }
}
