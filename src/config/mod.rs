/// Application settings loaded from `config.toml`
pub mod app;

/// Database URL resolution and scratch schema bootstrap
pub mod database;

pub use app::{AppConfig, DatabaseConfig, DisplayConfig, load_app_config, load_config};
