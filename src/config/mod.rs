//! Application configuration module
//!
//! Configuration is read from environment variables with the `CHAIN_PRICING`
//! prefix, using `__` to separate nested values. A `.env` file is honoured
//! during development.
//!
//! # Example
//!
//! ```no_run
//! use chain_pricing::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod error;
mod pricing;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use pricing::PricingConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Tier storage. Without it, tiers come from the catalog file.
    pub database: Option<DatabaseConfig>,

    pub pricing: PricingConfig,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// - `CHAIN_PRICING__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CHAIN_PRICING__DATABASE__URL=...` -> `database.url = ...`
    /// - `CHAIN_PRICING__PRICING__CATALOG_PATH=...` -> `pricing.catalog_path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required value is missing or cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CHAIN_PRICING")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        self.pricing.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
