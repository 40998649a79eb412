//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Environment variable holding the token signing secret
pub const JWT_SECRET_VAR: &str = "JWT_SECRET";

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing and verifying tokens
    pub secret: String,

    /// Signing algorithm name (default: HS512)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Freshness window in whole elapsed days: a token whose truncated
    /// elapsed-day count exceeds this value is rejected
    #[serde(default = "default_freshness_window_days")]
    pub freshness_window_days: i64,
}

impl JwtConfig {
    /// Create a new JWT configuration with a secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: default_algorithm(),
            freshness_window_days: default_freshness_window_days(),
        }
    }

    /// Load the JWT configuration from the process environment.
    ///
    /// The signing secret is a hard precondition: every encode and decode
    /// depends on it, so a missing or empty `JWT_SECRET` refuses startup
    /// instead of surfacing later as per-request failures.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var(JWT_SECRET_VAR)
            .map_err(|_| ConfigError::missing(JWT_SECRET_VAR))?;
        if secret.is_empty() {
            return Err(ConfigError::invalid(JWT_SECRET_VAR, "secret must not be empty"));
        }

        let freshness_window_days = match std::env::var("TOKEN_FRESHNESS_WINDOW_DAYS") {
            Ok(raw) => raw.parse().map_err(|_| {
                ConfigError::invalid("TOKEN_FRESHNESS_WINDOW_DAYS", format!("not an integer: {}", raw))
            })?,
            Err(_) => default_freshness_window_days(),
        };

        Ok(Self {
            secret,
            algorithm: default_algorithm(),
            freshness_window_days,
        })
    }

    /// Set the freshness window in whole days
    pub fn with_freshness_window_days(mut self, days: i64) -> Self {
        self.freshness_window_days = days;
        self
    }
}

fn default_algorithm() -> String {
    String::from("HS512")
}

fn default_freshness_window_days() -> i64 {
    1
}
