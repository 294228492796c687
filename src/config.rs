//! Configuration management for the `SnowDay` calculator
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use crate::SnowDayError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `SnowDay` calculator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnowDayConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Scoring configuration
    #[serde(default)]
    pub scoring: ScoringConfig,
}

/// Logging configuration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Scoring configuration settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Multiplier applied after penalties, before clamping.
    /// Districts that close readily can raise it, hardy ones lower it.
    #[serde(default = "default_regional_factor")]
    pub regional_factor: f64,
}

// Default value functions
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_regional_factor() -> f64 {
    1.0
}

/// Upper bound accepted for the regional factor
const MAX_REGIONAL_FACTOR: f64 = 3.0;

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            regional_factor: default_regional_factor(),
        }
    }
}

impl SnowDayConfig {
    /// Load configuration from the given file, or the default location when
    /// `None`, then apply `SNOWDAY_*` environment overrides
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.as_path())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. SNOWDAY_SCORING__REGIONAL_FACTOR=1.2
        builder = builder.add_source(
            Environment::with_prefix("SNOWDAY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: SnowDayConfig = settings
            .try_deserialize()
            .with_context(|| format!("Failed to deserialize configuration from {}", config_file.display()))?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("snowday").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_scoring()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_scoring(&self) -> Result<()> {
        let factor = self.scoring.regional_factor;
        if !factor.is_finite() || factor <= 0.0 || factor > MAX_REGIONAL_FACTOR {
            return Err(SnowDayError::config(format!(
                "Regional factor must be greater than 0 and at most {MAX_REGIONAL_FACTOR}, got {factor}"
            ))
            .into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(SnowDayError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(SnowDayError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
