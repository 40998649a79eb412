//! Configuration for the revocation ingestion pipeline

use std::time::Duration;

use ag_shared::config::MessagingConfig;

/// Configuration for the revocation ingestion worker
#[derive(Debug, Clone)]
pub struct IngestionConfig {
    /// Delay before re-establishing a dropped subscription.
    /// Fixed on every attempt; the supervisor never backs off further and
    /// never gives up.
    pub retry_delay: Duration,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            retry_delay: Duration::from_secs(2),
        }
    }
}

impl IngestionConfig {
    /// Set the resubscribe delay
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }
}

impl From<&MessagingConfig> for IngestionConfig {
    fn from(config: &MessagingConfig) -> Self {
        Self {
            retry_delay: Duration::from_secs(config.retry_delay_seconds),
        }
    }
}
