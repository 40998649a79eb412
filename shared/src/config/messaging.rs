//! Messaging configuration for the revocation event feed

use serde::{Deserialize, Serialize};

/// Configuration for the inbound revocation event channel
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessagingConfig {
    /// Redis connection URL
    pub url: String,

    /// Stream key the revocation events are published to
    pub stream: String,

    /// Consumer group this service reads as
    pub group: String,

    /// Seconds to wait before re-establishing a dropped subscription.
    /// Fixed delay, applied on every attempt.
    pub retry_delay_seconds: u64,

    /// Maximum number of events fetched per read
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://127.0.0.1:6379"),
            stream: String::from("revocations"),
            group: String::from("authgate"),
            retry_delay_seconds: 2,
            batch_size: default_batch_size(),
        }
    }
}

impl MessagingConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: std::env::var("REDIS_URL").unwrap_or(defaults.url),
            stream: std::env::var("REVOCATION_STREAM").unwrap_or(defaults.stream),
            group: std::env::var("REVOCATION_GROUP").unwrap_or(defaults.group),
            retry_delay_seconds: std::env::var("REVOCATION_RETRY_DELAY_SECONDS")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(defaults.retry_delay_seconds),
            batch_size: defaults.batch_size,
        }
    }

    /// Create a new messaging configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

fn default_batch_size() -> usize {
    10
}
