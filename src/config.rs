//! Configuration for default paths.
//!
//! Stored in TOML at `~/.config/trip-insights/config.toml` (or the platform
//! equivalent). Everything is optional; CLI flags always win.
//!
//! # Example Configuration
//!
//! ```toml
//! input = "/data/taxi/trips_2024_01.jsonl"
//! output_dir = "/data/taxi/insights"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Defaults applied when the corresponding CLI flag is absent.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Default trip file to load.
    #[serde(default)]
    pub input: Option<PathBuf>,

    /// Default directory the insights bundle is written to.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("trip-insights").join("config.toml"))
    }

    /// Load the config, falling back to defaults when the file is absent.
    /// A present-but-malformed file is an error, not a silent default.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&contents)?)
    }
}
