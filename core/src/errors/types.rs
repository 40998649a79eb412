//! Domain-specific error types for token and revocation operations
//!
//! This module provides error type definitions for token management,
//! input validation, and revocation ingestion. Validation of *presented*
//! tokens never raises these across the service boundary: the verification
//! operations fold token problems into a boolean instead.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Missing claim: {claim}")]
    MissingClaim { claim: String },
}

/// Input validation errors
///
/// Raised only for structurally invalid input to issuance and entity
/// construction, never for malformed presented tokens.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid length: {field} (max: {max}, actual: {actual})")]
    InvalidLength {
        field: String,
        max: usize,
        actual: usize,
    },
}

/// Revocation ingestion errors
#[derive(Error, Debug)]
pub enum IngestionError {
    #[error("Malformed revocation event: {reason}")]
    MalformedEvent { reason: String },

    #[error("Subscription transport failure: {message}")]
    Transport { message: String },
}
