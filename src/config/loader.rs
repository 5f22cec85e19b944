//! Config file discovery and parsing

use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::PromptboxError;

/// Default config file location: `<config_dir>/promptbox/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("promptbox").join("config.toml"))
}

/// Load configuration from the default location
///
/// A missing config directory or file is not an error; defaults apply.
pub fn load_config() -> Result<Config, PromptboxError> {
    match default_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

/// Load configuration from a specific path
///
/// Returns defaults when the file does not exist. A file that exists but
/// fails to parse is reported as an error so typos are not silently ignored.
pub fn load_config_from(path: &Path) -> Result<Config, PromptboxError> {
    if !path.exists() {
        log::debug!("No config file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|e| PromptboxError::InvalidConfig {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
