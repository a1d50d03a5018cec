//! Configuration management for the destinations CLI
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use crate::DestinationsError;
use crate::present::OutputFormat;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_DIR: &str = "athletic-destinations";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DestinationsConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Output settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Output settings for rendered destinations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Output format (text or json)
    #[serde(default)]
    pub format: OutputFormat,
    /// Print travel tips on destination cards
    #[serde(default = "default_true")]
    pub show_tips: bool,
    /// Print the five-day itinerary on destination cards
    #[serde(default = "default_true")]
    pub show_itinerary: bool,
    /// Maximum number of tips per card
    #[serde(default = "default_max_tips")]
    pub max_tips: u32,
}

// Default value functions
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_tips() -> u32 {
    3
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_tips: true,
            show_itinerary: true,
            max_tips: default_max_tips(),
        }
    }
}

impl DestinationsConfig {
    /// Load configuration from `config_path`, or from the default file
    /// location when none is given, then apply environment overrides
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.or_else(Self::get_config_path);

        if let Some(config_file) = config_file.filter(|path| path.exists()) {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. ATHLETIC_LOGGING__LEVEL=debug
        builder = builder.add_source(
            Environment::with_prefix("ATHLETIC")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: DestinationsConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Apply default values to blank configuration fields
    pub fn apply_defaults(&mut self) {
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.display.max_tips == 0 {
            self.display.max_tips = default_max_tips();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.display.max_tips > 20 {
            return Err(DestinationsError::config("Display max tips cannot exceed 20").into());
        }
        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(DestinationsError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(DestinationsError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "athletic-destinations-{}-{name}.toml",
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = DestinationsConfig::default();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.display.format, OutputFormat::Text);
        assert!(config.display.show_tips);
        assert!(config.display.show_itinerary);
        assert_eq!(config.display.max_tips, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = DestinationsConfig::default();
        config.logging.level = "verbose".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_load_rejects_unknown_display_format() {
        let path = write_temp_config("display-format", "[display]\nformat = \"yaml\"\n");
        let result = DestinationsConfig::load_from_path(Some(path.clone()));
        fs::remove_file(&path).ok();
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to deserialize configuration"));
        assert!(format!("{err:#}").contains("yaml"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = DestinationsConfig::default();
        config.display.max_tips = 50;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot exceed 20"));
    }

    #[test]
    fn test_apply_defaults_fills_blanks() {
        let mut config = DestinationsConfig::default();
        config.logging.level.clear();
        config.display.max_tips = 0;
        config.apply_defaults();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.display.max_tips, 3);
    }

    #[test]
    fn test_load_from_file() {
        let path = write_temp_config(
            "load",
            "[logging]\nlevel = \"debug\"\n\n[display]\nformat = \"json\"\nshow_tips = false\n",
        );
        let config = DestinationsConfig::load_from_path(Some(path.clone())).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.display.format, OutputFormat::Json);
        assert!(!config.display.show_tips);
        // untouched fields keep their defaults
        assert!(config.display.show_itinerary);
        assert_eq!(config.display.max_tips, 3);
    }

    #[test]
    fn test_load_rejects_invalid_file_values() {
        let path = write_temp_config("invalid", "[logging]\nformat = \"xml\"\n");
        let result = DestinationsConfig::load_from_path(Some(path.clone()));
        fs::remove_file(&path).ok();
        assert!(result.unwrap_err().to_string().contains("Invalid log format"));
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = DestinationsConfig::get_config_path() {
            assert!(path.to_string_lossy().contains(APP_DIR));
            assert!(path.to_string_lossy().ends_with("config.toml"));
        }
    }
}
