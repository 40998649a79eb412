//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading configuration from the process environment.
///
/// These are startup-time failures: a service that cannot assemble its
/// configuration must refuse to start rather than degrade per-request.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {name}")]
    MissingVariable { name: String },

    #[error("Invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
}

impl ConfigError {
    /// Shorthand for a missing-variable error
    pub fn missing(name: impl Into<String>) -> Self {
        ConfigError::MissingVariable { name: name.into() }
    }

    /// Shorthand for an invalid-value error
    pub fn invalid(name: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            name: name.into(),
            message: message.into(),
        }
    }
}
