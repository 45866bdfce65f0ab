//! Configuration management for Tandem.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, TandemError};
use crate::core::search::RESULT_CAP;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Data snapshot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// Directory holding the collection snapshot files
    /// (media.json, notes.json, places.json)
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Default number of results to display
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Maximum query string length
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

// Default value functions
fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_limit() -> usize {
    20
}

fn default_max_query_length() -> usize {
    500
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_query_length: default_max_query_length(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| TandemError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// This method uses XDG Base Directory specification for file locations.
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. TANDEM_CONFIG_FILE env var
    /// 2. XDG config file (~/.config/tandem/config.toml)
    /// 3. ./tandem.toml in the working directory
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("tandem.toml").exists() {
                Self::from_file("tandem.toml")?
            } else {
                Self::default()
            }
        };

        // Point at the XDG data directory unless the config (or env) says otherwise
        if env::var("TANDEM_DATA_DIR").is_err() && config.data.dir == default_data_dir() {
            config.data.dir = xdg.data_dir.clone();
        }

        // Override with environment variables
        config.merge_env();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Data configuration
        if let Ok(data_dir) = env::var("TANDEM_DATA_DIR") {
            self.data.dir = PathBuf::from(data_dir);
        }

        // Search configuration
        if let Ok(limit) = env::var("TANDEM_DEFAULT_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.search.default_limit = l;
            }
        }
        if let Ok(max_query_len) = env::var("TANDEM_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.search.default_limit == 0 {
            return Err(TandemError::ConfigError(
                "Default limit must be non-zero".to_string(),
            ));
        }

        if self.search.default_limit > RESULT_CAP {
            return Err(TandemError::ConfigError(format!(
                "Default limit cannot exceed the result cap of {RESULT_CAP}"
            )));
        }

        if self.search.max_query_length == 0 {
            return Err(TandemError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Data dir: {:?}", self.data.dir);
        tracing::debug!("  Default limit: {}", self.search.default_limit);
        tracing::debug!("  Max query length: {}", self.search.max_query_length);
    }
}
