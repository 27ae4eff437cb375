//! Configuration loading
//!
//! The engine itself takes no configuration; these helpers load the
//! TOML data files consumed by tooling and the demo binary (combatant
//! rosters).

mod combatants;

pub use combatants::{load_combatant_configs, parse_combatant_configs};

use std::path::Path;
use thiserror::Error;

/// Errors from loading configuration files
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    ValidationError(String),
}

/// Load and parse a TOML file into a deserializable type
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Parse TOML content into a deserializable type
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(content)?)
}
