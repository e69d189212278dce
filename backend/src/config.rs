//! Configuration management for the Inventory Tracker
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with INVENTORY_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL, e.g. `sqlite://inventory.db?mode=rwc`
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("INVENTORY_ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let server = ServerConfig::default();
        let database = DatabaseConfig::default();

        let config = config::Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("server.port", i64::from(server.port))?
            .set_default("server.host", server.host)?
            .set_default("database.url", database.url)?
            .set_default("database.max_connections", i64::from(database.max_connections))?
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // e.g. INVENTORY_DATABASE__URL=sqlite://data/stock.db
            .add_source(
                Environment::with_prefix("INVENTORY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://inventory.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}
