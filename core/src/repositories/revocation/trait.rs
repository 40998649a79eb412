//! Revocation repository trait defining the interface to the revocation list.

use async_trait::async_trait;
use std::collections::HashSet;

use crate::domain::entities::revocation::RevokedToken;
use crate::errors::DomainError;

/// Repository trait for the revoked-token list.
///
/// The store holds exact token strings. Implementations must keep the
/// insert idempotent and atomic: two concurrent inserts of the same token
/// string must end with exactly one entry and no error.
#[async_trait]
pub trait RevocationRepository: Send + Sync {
    /// Insert a token into the revocation list if it is not already there.
    ///
    /// The check and the insert are one atomic operation; separate
    /// lookup-then-insert implementations are incorrect under concurrent
    /// delivery of duplicate revocation events.
    ///
    /// # Arguments
    /// * `token` - Exact token string to revoke
    ///
    /// # Returns
    /// * `Ok(RevokedToken)` - The newly created entry, or the pre-existing
    ///   one when the token was already revoked
    /// * `Err(DomainError)` - Token string invalid or storage failure
    async fn insert_if_absent(&self, token: &str) -> Result<RevokedToken, DomainError>;

    /// Return every revoked token string.
    ///
    /// # Returns
    /// * `Ok(HashSet<String>)` - The full revocation set
    /// * `Err(DomainError)` - Storage failure
    async fn list_all(&self) -> Result<HashSet<String>, DomainError>;

    /// Find a revocation entry by its exact token string
    ///
    /// # Returns
    /// * `Ok(Some(RevokedToken))` - Entry found
    /// * `Ok(None)` - Token is not revoked
    /// * `Err(DomainError)` - Storage failure
    async fn find(&self, token: &str) -> Result<Option<RevokedToken>, DomainError>;

    /// Check whether a token string is revoked
    async fn is_revoked(&self, token: &str) -> Result<bool, DomainError> {
        Ok(self.find(token).await?.is_some())
    }
}
