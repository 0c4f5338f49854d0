//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all service settings.
//! Configuration is loaded from a TOML file; every section is optional and
//! falls back to defaults.
//!
//! # Example
//!
//! ```no_run
//! use menucast::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

use super::boost::BoostConfig;
use super::calendar::CalendarConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use crate::error::{ConfigError, Result};

/// Location of the historical dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_history_path")]
    pub history_path: String,
}

fn default_history_path() -> String {
    "Transformed_Restaurant_Data.csv".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            history_path: default_history_path(),
        }
    }
}

/// Location of the serialized model artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_model_path")]
    pub path: String,
}

fn default_model_path() -> String {
    "restaurant_model.json".to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
        }
    }
}

/// Feature assembly options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeaturesConfig {
    /// Also forecast the item dropped as the one-hot reference level.
    ///
    /// Off by default: only items with an indicator column are forecast.
    #[serde(default)]
    pub predict_reference_item: bool,
}

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// HTTP listen address.
    #[serde(default)]
    pub server: ServerConfig,

    /// Historical dataset location.
    #[serde(default)]
    pub data: DataConfig,

    /// Model artifact location.
    #[serde(default)]
    pub model: ModelConfig,

    /// Special-day date sets.
    #[serde(default)]
    pub calendar: CalendarConfig,

    /// Special-day multiplier range.
    #[serde(default)]
    pub boost: BoostConfig,

    #[serde(default)]
    pub features: FeaturesConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    /// Check field values. Called by [`Config::load`]; call again after
    /// applying command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.data.history_path.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "data.history_path",
            }
            .into());
        }
        if self.model.path.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "model.path" }.into());
        }
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        self.server.socket_addr()?;

        if !self.boost.min.is_finite() || !self.boost.max.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "boost",
                reason: "bounds must be finite".to_string(),
            }
            .into());
        }
        if self.boost.min < 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "boost.min",
                reason: "must be >= 1.0".to_string(),
            }
            .into());
        }
        if self.boost.max <= self.boost.min {
            return Err(ConfigError::InvalidValue {
                field: "boost.max",
                reason: "must be greater than boost.min".to_string(),
            }
            .into());
        }

        self.calendar.special_dates()?;
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
