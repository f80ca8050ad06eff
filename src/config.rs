//! Configuration for the epochal binary.
//!
//! This module handles loading, parsing, and validation of configuration
//! files. The library itself takes explicit [`Clock`] values; configuration
//! only decides which clock and default pattern the CLI hands down.

use crate::clock::Clock;
use crate::format;
use crate::pattern;
use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub clock: ClockConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Clock configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClockConfig {
    /// Fixed UTC offset such as "+08:00" or "-05:30"
    /// When unset, the offset of the system timezone is used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utc_offset: Option<String>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pattern used by commands that print date-times without naming one
    pub default_pattern: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_pattern: pattern::DATETIME_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("epochal.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("epochal").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate the offset
        if let Some(raw) = &self.clock.utc_offset {
            if let Err(e) = raw.parse::<FixedOffset>() {
                anyhow::bail!("Invalid utc_offset '{}': {}", raw, e);
            }
        }

        // Validate the output pattern by exercising the formatter once
        let probe = Clock::system();
        if let Err(e) = format::format_instant(&probe, DateTime::UNIX_EPOCH, &self.output.default_pattern) {
            anyhow::bail!("Invalid default_pattern '{}': {}", self.output.default_pattern, e);
        }

        Ok(())
    }

    /// Build the clock every command hands down to the library
    pub fn build_clock(&self) -> Result<Clock> {
        match &self.clock.utc_offset {
            Some(raw) => {
                let offset: FixedOffset = raw
                    .parse()
                    .map_err(|e| anyhow::anyhow!("Invalid utc_offset '{}': {}", raw, e))?;
                log::debug!("using configured UTC offset {}", offset);
                Ok(Clock::with_offset(offset))
            }
            None => Ok(Clock::system()),
        }
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# epochal configuration file\n# Generated on {}\n\n",
            format::format_now_datetime(&Clock::system())
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("Wrote default configuration: {}", path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("epochal"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
