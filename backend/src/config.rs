//! Configuration management for the Citrus Juice Tracker
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with JUICE_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Record store configuration
    pub storage: StorageConfig,

    /// Prediction defaults
    pub prediction: PredictionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

/// Which record store backs the service
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Csv,
    Postgres,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,

    /// Path of the CSV sheet when `backend = "csv"`
    pub csv_path: String,

    /// PostgreSQL connection URL when `backend = "postgres"`
    pub database_url: Option<String>,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PredictionConfig {
    /// Rolling window size used when a request does not give one
    pub default_window: usize,

    /// Use the rolling window unless a request asks for full history
    pub rolling_by_default: bool,
}

impl PredictionConfig {
    /// Resolve the history window for a request
    ///
    /// `None` means full history.
    pub fn resolve_window(&self, window: Option<usize>, full_history: Option<bool>) -> Option<usize> {
        let full = full_history.unwrap_or(!self.rolling_by_default);
        if full {
            None
        } else {
            Some(window.unwrap_or(self.default_window))
        }
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("JUICE_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("storage.backend", "csv")?
            .set_default("storage.csv_path", "data/juice_data.csv")?
            .set_default("storage.max_connections", 5)?
            .set_default("storage.min_connections", 1)?
            .set_default("prediction.default_window", shared::DEFAULT_WINDOW_SIZE as i64)?
            .set_default("prediction.rolling_by_default", true)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (JUICE_ prefix)
            .add_source(
                Environment::with_prefix("JUICE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        shared::validate_window_size(self.prediction.default_window)
            .map_err(|msg| ConfigError::Message(format!("prediction.default_window: {}", msg)))?;

        if self.storage.backend == StorageBackend::Postgres && self.storage.database_url.is_none() {
            return Err(ConfigError::Message(
                "storage.database_url is required for the postgres backend".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            default_window: shared::DEFAULT_WINDOW_SIZE,
            rolling_by_default: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_window_defaults_to_rolling() {
        let prediction = PredictionConfig::default();
        assert_eq!(prediction.resolve_window(None, None), Some(10));
        assert_eq!(prediction.resolve_window(Some(3), None), Some(3));
        assert_eq!(prediction.resolve_window(Some(3), Some(true)), None);
    }

    #[test]
    fn test_resolve_window_full_history_default() {
        let prediction = PredictionConfig {
            default_window: 5,
            rolling_by_default: false,
        };
        assert_eq!(prediction.resolve_window(None, None), None);
        assert_eq!(prediction.resolve_window(None, Some(false)), Some(5));
    }
}
