//! Typed configuration loaded from the process environment.
//!
//! Each sub-module owns one concern:
//! - `auth` - token signing secret and freshness window
//! - `database` - MySQL pool settings
//! - `messaging` - revocation event feed settings
//! - `environment` - deployment environment detection

pub mod auth;
pub mod database;
pub mod environment;
pub mod messaging;

pub use auth::{JwtConfig, JWT_SECRET_VAR};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use messaging::MessagingConfig;

use crate::errors::ConfigError;

/// Aggregated application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Token signing configuration
    pub auth: JwtConfig,
    /// Database settings
    pub database: DatabaseConfig,
    /// Revocation feed settings
    pub messaging: MessagingConfig,
}

impl AppConfig {
    /// Assemble the full configuration from the environment.
    ///
    /// Only the auth section can refuse to load; everything else falls back
    /// to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env(),
            auth: JwtConfig::from_env()?,
            database: DatabaseConfig::from_env(),
            messaging: MessagingConfig::from_env(),
        })
    }
}
