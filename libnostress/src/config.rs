//! Configuration management for Nostress
//!
//! Configuration is load-only: the tools read `config.toml` at startup and
//! never write it back.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::keys::KeyFormat;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key format used when the CLI is given none
    pub default_key_format: KeyFormat,

    /// Directory used when an output filename has no path component
    pub default_output_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_key_format: KeyFormat::Hex,
            default_output_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing config file is not an error; defaults are returned instead.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
///
/// `NOSTRESS_CONFIG` overrides the lookup entirely (tilde-expanded).
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("NOSTRESS_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("nostress").join("config.toml"))
}
