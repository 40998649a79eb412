//! Revocation ingestion pipeline
//!
//! This module keeps the revocation list current by consuming an external
//! revocation-event feed:
//! - Subscription seams abstracting the message channel (ack/nack per message)
//! - A supervised always-on worker with fixed-delay resubscribe
//! - Idempotent writes into the revocation store
//! - Cooperative shutdown joined at service teardown

mod config;
mod service;
mod subscriber;

#[cfg(test)]
mod tests;

pub use config::IngestionConfig;
pub use service::{IngestorHandle, RevocationIngestor};
pub use subscriber::{RevocationMessage, RevocationSource, RevocationSubscription};
