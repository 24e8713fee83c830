//! Configuration file management.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default recorder database path
    #[serde(default)]
    pub database: Option<PathBuf>,

    /// Default target unit ("celsius" or "fahrenheit")
    #[serde(default)]
    pub unit: Option<String>,

    /// Disable colored output
    #[serde(default)]
    pub no_color: bool,
}

impl Config {
    /// Get the config file path
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hearth")
            .join("config.toml")
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        let path = Self::path();
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config: {}", e);
                    }
                },
                Err(e) => {
                    eprintln!("Warning: Failed to read config: {}", e);
                }
            }
        }
        Self::default()
    }
}

/// Resolve the database path from the argument or the config file.
pub fn resolve_database(database: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    database.or_else(|| config.database.clone()).context(
        "No database path given; pass one as an argument or set `database` in the config file",
    )
}
