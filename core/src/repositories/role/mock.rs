//! Mock implementation of RoleRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::role::Role;
use crate::errors::DomainError;

use super::r#trait::RoleRepository;

/// In-memory role repository for testing
pub struct MockRoleRepository {
    roles: Arc<RwLock<HashMap<u64, Role>>>,
}

impl MockRoleRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            roles: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Assign a role to a user
    pub async fn assign(&self, user_id: u64, role: Role) {
        self.roles.write().await.insert(user_id, role);
    }
}

impl Default for MockRoleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoleRepository for MockRoleRepository {
    async fn find_by_user_id(&self, user_id: u64) -> Result<Option<Role>, DomainError> {
        let roles = self.roles.read().await;
        Ok(roles.get(&user_id).cloned())
    }
}
