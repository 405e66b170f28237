//! Converter configuration.
//!
//! Configuration is loaded in the following order (later overrides earlier):
//! 1. Default values
//! 2. YAML config file (if specified via DKAR_CONFIG or --config)
//! 3. Environment variables
//! 4. Command-line flags (applied by the caller)

use dkar_core::{OverflowPolicy, WriteMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Converter configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// State name mapping.
    pub naming: NamingConfig,
    /// Output file handling.
    pub output: OutputConfig,
}

impl Config {
    /// Loads configuration from an optional file, then applies environment
    /// variable overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(path.to_path_buf(), e))?;
        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e.to_string()))?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.naming.apply_env_overrides()?;
        self.output.apply_env_overrides()?;
        Ok(())
    }
}

/// State name mapping configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Handling of `q<N>` names past `q25`.
    pub overflow: OverflowPolicy,
}

impl NamingConfig {
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(policy) = std::env::var("DKAR_NAME_OVERFLOW") {
            self.overflow = parse_overflow_policy(&policy)?;
        }
        Ok(())
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Direct streaming or temp file + rename.
    pub write_mode: WriteMode,
}

impl OutputConfig {
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(mode) = std::env::var("DKAR_WRITE_MODE") {
            self.write_mode = parse_write_mode(&mode)?;
        }
        Ok(())
    }
}

fn parse_overflow_policy(value: &str) -> Result<OverflowPolicy, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "preserve" => Ok(OverflowPolicy::Preserve),
        "reject" => Ok(OverflowPolicy::Reject),
        other => Err(ConfigError::ValidationError(format!(
            "DKAR_NAME_OVERFLOW must be 'preserve' or 'reject', got '{}'",
            other
        ))),
    }
}

fn parse_write_mode(value: &str) -> Result<WriteMode, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "direct" => Ok(WriteMode::Direct),
        "atomic" => Ok(WriteMode::Atomic),
        other => Err(ConfigError::ValidationError(format!(
            "DKAR_WRITE_MODE must be 'direct' or 'atomic', got '{}'",
            other
        ))),
    }
}

/// Configuration error.
#[derive(Debug)]
pub enum ConfigError {
    IoError(PathBuf, std::io::Error),
    ParseError(PathBuf, String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(path, e) => {
                write!(f, "failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "failed to parse config file '{}': {}", path.display(), e)
            }
            ConfigError::ValidationError(msg) => {
                write!(f, "configuration validation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
