//! CLI configuration
//!
//! Optional JSON file, by default at `~/.h416/config.json`. Every field has a
//! default and command-line flags override whatever the file says.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default read chunk for files and stdin (64 KiB)
pub const DEFAULT_READ_BUFFER: usize = 64 * 1024;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File I/O error: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("read_buffer must be greater than zero")]
    InvalidReadBuffer,

    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),
}

/// How digests are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<hex>  <name>` lines
    #[default]
    Hex,
    /// One JSON object per input
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output format for `digest`
    pub output: OutputFormat,
    /// Bytes per read when hashing files and stdin
    pub read_buffer: usize,
    /// Log level (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::Hex,
            read_buffer: DEFAULT_READ_BUFFER,
            log_level: None,
        }
    }
}

impl Config {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load `explicit` if given (it must exist), otherwise `fallback` if it
    /// exists, otherwise the defaults.
    pub fn load(explicit: Option<&Path>, fallback: Option<&Path>) -> Result<Self, ConfigError> {
        match (explicit, fallback) {
            (Some(path), _) => Self::load_from_file(path),
            (None, Some(path)) if path.exists() => Self::load_from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Check field ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.read_buffer == 0 {
            return Err(ConfigError::InvalidReadBuffer);
        }
        if let Some(level) = &self.log_level {
            parse_log_level(level)?;
        }
        Ok(())
    }

    /// Save as pretty-printed JSON.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Parse a log level name.
pub fn parse_log_level(level: &str) -> Result<log::LevelFilter, ConfigError> {
    level
        .parse()
        .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))
}

/// Get the default config file path
#[cfg(feature = "cli")]
pub fn default_config_path() -> std::path::PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    home.join(".h416").join("config.json")
}

/// Ensure the config directory exists
#[cfg(feature = "cli")]
pub fn ensure_config_dir() -> Result<std::path::PathBuf, ConfigError> {
    let config_path = default_config_path();
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(config_path)
}
