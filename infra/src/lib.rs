//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the AuthGate
//! application. It provides concrete implementations of the core seams:
//! database access and the revocation event feed.
//!
//! ## Architecture
//!
//! - **Database**: MySQL repository implementations using SQLx
//! - **Messaging**: Redis Streams consumer for revocation events

use thiserror::Error;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Messaging module - revocation event feed
pub mod messaging;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis messaging error
    #[error("Messaging error: {0}")]
    Messaging(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

impl From<InfrastructureError> for ag_core::errors::DomainError {
    fn from(error: InfrastructureError) -> Self {
        ag_core::errors::DomainError::Internal {
            message: error.to_string(),
        }
    }
}
