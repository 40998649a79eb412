//! MySQL implementation of the RevocationRepository trait.
//!
//! Revoked tokens live in a single table keyed by the exact token string.
//! The insert uses `INSERT IGNORE` so the check and the write are one
//! atomic statement: concurrent deliveries of the same revocation event
//! race benignly and the table ends up with exactly one row.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use ag_core::domain::entities::revocation::{RevokedToken, MAX_TOKEN_LENGTH};
use ag_core::errors::{DomainError, ValidationError};
use ag_core::repositories::RevocationRepository;

/// MySQL implementation of RevocationRepository
pub struct MySqlRevocationRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRevocationRepository {
    /// Create a new MySQL revocation repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a RevokedToken entity
    fn row_to_entry(row: &sqlx::mysql::MySqlRow) -> Result<RevokedToken, DomainError> {
        Ok(RevokedToken {
            token: row.try_get("token").map_err(|e| DomainError::Internal {
                message: format!("Failed to get token: {}", e),
            })?,
            revoked_at: row
                .try_get::<DateTime<Utc>, _>("revoked_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get revoked_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl RevocationRepository for MySqlRevocationRepository {
    async fn insert_if_absent(&self, token: &str) -> Result<RevokedToken, DomainError> {
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(DomainError::Validation(ValidationError::InvalidLength {
                field: String::from("token"),
                max: MAX_TOKEN_LENGTH,
                actual: token.len(),
            }));
        }

        let query = "INSERT IGNORE INTO revoked_tokens (token, revoked_at) VALUES (?, ?)";
        sqlx::query(query)
            .bind(token)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to insert revoked token: {}", e),
            })?;

        // Read back the surviving row: either the one just written or the
        // pre-existing entry the IGNORE kept
        self.find(token)
            .await?
            .ok_or_else(|| DomainError::Internal {
                message: String::from("Revoked token missing after insert"),
            })
    }

    async fn list_all(&self) -> Result<HashSet<String>, DomainError> {
        let rows = sqlx::query("SELECT token FROM revoked_tokens")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to list revoked tokens: {}", e),
            })?;

        rows.iter()
            .map(|row| {
                row.try_get("token").map_err(|e| DomainError::Internal {
                    message: format!("Failed to get token: {}", e),
                })
            })
            .collect()
    }

    async fn find(&self, token: &str) -> Result<Option<RevokedToken>, DomainError> {
        let query = "SELECT token, revoked_at FROM revoked_tokens WHERE token = ? LIMIT 1";

        let result = sqlx::query(query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find revoked token: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_entry(&row)?)),
            None => Ok(None),
        }
    }
}
