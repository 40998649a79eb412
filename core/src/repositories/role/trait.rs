//! Role repository trait defining the role-lookup interface.

use async_trait::async_trait;

use crate::domain::entities::role::Role;
use crate::errors::DomainError;

/// Repository trait for role lookups.
///
/// Issuance consumes this seam to resolve the ordered list of service keys
/// a user's role grants. The access order returned is the order attached to
/// the role.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Find the role assigned to a user
    ///
    /// # Arguments
    /// * `user_id` - Identifier of the user
    ///
    /// # Returns
    /// * `Ok(Some(Role))` - Role found, accesses in role order
    /// * `Ok(None)` - User has no role (or does not exist)
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_user_id(&self, user_id: u64) -> Result<Option<Role>, DomainError>;
}
