//! Application configuration loading from config.toml
//!
//! All sections and fields are optional; anything left out falls back to the
//! defaults below. The database URL itself comes from `DATABASE_URL` (see
//! [`super::database`]) so credentials stay out of the TOML file.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_VAR: &str = "DASHBOARD_CONFIG";

/// Config file read when [`CONFIG_PATH_VAR`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Database behaviour
    pub database: DatabaseConfig,
    /// Rendering options for tables and charts
    pub display: DisplayConfig,
}

/// `[database]` section
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Create the dashboard tables on startup when missing.
    ///
    /// Only meant for scratch and demo databases.
    pub bootstrap_schema: bool,
}

/// `[display]` section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Rows shown per table before truncating
    pub max_table_rows: usize,
    /// Width in characters of the longest chart bar
    pub bar_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_table_rows: 25,
            bar_width: 20,
        }
    }
}

/// Loads the configuration from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Loads the configuration from `DASHBOARD_CONFIG` or `./config.toml`.
///
/// A missing file is not an error; defaults are used instead.
pub fn load_app_config() -> Result<AppConfig> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    if Path::new(&path).exists() {
        load_config(&path)
    } else {
        info!("No config file at {path}, using defaults.");
        Ok(AppConfig::default())
    }
}
