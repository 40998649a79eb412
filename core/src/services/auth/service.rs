//! Authentication service composing role lookup, token issuance, and
//! validation

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::errors::DomainError;
use crate::repositories::{RevocationRepository, RoleRepository};
use crate::services::token::{Clock, SystemClock, TokenService};

/// Service for issuing role-scoped tokens and validating presented ones.
///
/// This is the surface a transport layer calls. Token problems never
/// surface as errors from `validate`; only storage failures and missing
/// roles do.
pub struct AuthService<R, V, C = SystemClock>
where
    R: RoleRepository,
    V: RevocationRepository,
    C: Clock,
{
    roles: R,
    revocations: Arc<V>,
    tokens: TokenService<C>,
}

impl<R, V, C> AuthService<R, V, C>
where
    R: RoleRepository,
    V: RevocationRepository,
    C: Clock,
{
    /// Creates a new authentication service
    ///
    /// # Arguments
    ///
    /// * `roles` - Role lookup collaborator
    /// * `revocations` - Revocation store (shared with the ingestion worker)
    /// * `tokens` - Token issuance/validation service
    pub fn new(roles: R, revocations: Arc<V>, tokens: TokenService<C>) -> Self {
        Self {
            roles,
            revocations,
            tokens,
        }
    }

    /// Issues a token scoped to the service keys of a user's role.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed token
    /// * `Err(DomainError::NotFound)` - The user has no role
    /// * `Err(DomainError)` - Role lookup or signing failed
    #[instrument(skip(self))]
    pub async fn issue_for_user(&self, user_id: u64) -> Result<String, DomainError> {
        let role = self
            .roles
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("role for user {}", user_id),
            })?;

        debug!(role = %role.name, accesses = role.accesses.len(), "issuing token");
        self.tokens.issue(role.service_keys())
    }

    /// Validates a presented token against a service key.
    ///
    /// Fetches the current revocation list, then requires the token to be
    /// unrevoked, fresh, and granting the key. Malformed or expired tokens
    /// yield `Ok(false)`, never an error.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - The validation verdict
    /// * `Err(DomainError)` - Revocation store failure
    pub async fn validate(&self, token: &str, service_key: &str) -> Result<bool, DomainError> {
        let revoked = self.revocations.list_all().await?;
        Ok(self.tokens.check(token, service_key, &revoked))
    }
}
