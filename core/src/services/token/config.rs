//! Configuration for the token service

use jsonwebtoken::Algorithm;

use ag_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Signing secret shared by encode and decode
    pub secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Freshness window in whole elapsed days
    pub freshness_window_days: i64,
}

impl TokenConfig {
    /// Create a configuration with a secret and the default policy
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }
}

impl From<&JwtConfig> for TokenConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            algorithm: config.algorithm.parse().unwrap_or(Algorithm::HS512),
            freshness_window_days: config.freshness_window_days,
        }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS512,
            freshness_window_days: 1,
        }
    }
}
