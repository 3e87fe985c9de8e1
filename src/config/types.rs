use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::counter::{DEFAULT_MAX, DEFAULT_MIN};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial state of the counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Label shown in the header.
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_min")]
    pub min: i64,
    #[serde(default = "default_max")]
    pub max: i64,
    /// Starting value, must lie in `[min, max]`.
    #[serde(default)]
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Locale for translated strings (e.g. "es"). Unset means take it from
    /// `LC_ALL` / `LANG`.
    #[serde(default)]
    pub locale: Option<String>,
    /// Redraw/animation tick in milliseconds (default: 100).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to the platform data directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_min() -> i64 {
    DEFAULT_MIN
}

fn default_max() -> i64 {
    DEFAULT_MAX
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_logging_enabled() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            min: default_min(),
            max: default_max(),
            count: 0,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: None,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            level: default_log_level(),
            file: None,
        }
    }
}
