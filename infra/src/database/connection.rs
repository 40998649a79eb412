//! MySQL connection pool construction

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::info;

use ag_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Creates a MySQL connection pool from the database configuration
///
/// # Arguments
/// * `config` - Pool sizing and timeout settings
///
/// # Returns
/// * `Ok(MySqlPool)` - Connected pool
/// * `Err(InfrastructureError)` - Connection failed
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .max_lifetime(Duration::from_secs(config.max_lifetime))
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "database pool established"
    );

    Ok(pool)
}

/// Checks connectivity by running a trivial query
pub async fn ping(pool: &MySqlPool) -> Result<(), InfrastructureError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
