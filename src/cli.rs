use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

/// Bounded counter for the terminal.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "counter-app", version, about)]
pub struct Args {
    /// Path to the config file (default: <config_dir>/counter-app/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Title shown above the counter
    #[arg(long)]
    pub title: Option<String>,

    /// Lower bound of the counter
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i64>,

    /// Upper bound of the counter
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i64>,

    /// Starting value
    #[arg(long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Locale for UI strings (en, ar, es, hi, zh)
    #[arg(long)]
    pub locale: Option<String>,
}

impl Args {
    /// Overrides config values with the ones given on the command line.
    pub fn apply(&self, config: &mut Config) {
        if let Some(title) = &self.title {
            config.counter.title = title.clone();
        }
        if let Some(min) = self.min {
            config.counter.min = min;
        }
        if let Some(max) = self.max {
            config.counter.max = max;
        }
        if let Some(count) = self.count {
            config.counter.count = count;
        }
        if let Some(locale) = &self.locale {
            config.ui.locale = Some(locale.clone());
        }
    }

    /// Loads the config file, applies overrides and validates the result.
    ///
    /// Only the default location may be absent; a `--config` path must exist.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }
}
