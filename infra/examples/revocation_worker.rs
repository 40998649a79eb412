//! Example: running the revocation ingestion worker
//!
//! Wires configuration, the MySQL revocation store, and the Redis Streams
//! feed together, then keeps the worker running until ctrl-c.
//!
//! Required environment: JWT_SECRET, DATABASE_URL, REDIS_URL.
//!
//! Run with: cargo run --example revocation_worker -p ag_infra

use std::sync::Arc;

use tracing::info;

use ag_core::services::ingestion::{IngestionConfig, RevocationIngestor};
use ag_infra::database::{create_pool, MySqlRevocationRepository};
use ag_infra::messaging::RedisRevocationSource;
use ag_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Refuses to start without a signing secret
    let config = AppConfig::from_env()?;
    info!(environment = %config.environment, "starting revocation worker");

    let pool = create_pool(&config.database).await?;
    let repository = Arc::new(MySqlRevocationRepository::new(pool));
    let source = RedisRevocationSource::new(&config.messaging)?;

    let ingestor = RevocationIngestor::new(
        source,
        repository,
        IngestionConfig::from(&config.messaging),
    );
    let handle = ingestor.spawn();

    tokio::signal::ctrl_c().await?;
    info!("shutdown requested");
    handle.shutdown().await;

    Ok(())
}
