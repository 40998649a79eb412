//! MySQL implementation of the RoleRepository trait.
//!
//! Roles and their accesses live in three tables: `roles`, `accesses`, and
//! the `role_accesses` association. The association carries a `position`
//! column so the order accesses were attached to a role survives storage.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use ag_core::domain::entities::role::{Role, ServiceAccess};
use ag_core::errors::DomainError;
use ag_core::repositories::RoleRepository;

/// MySQL implementation of RoleRepository
pub struct MySqlRoleRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRoleRepository {
    /// Create a new MySQL role repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Load the accesses attached to a role, in attachment order
    async fn load_accesses(&self, role_id: u64) -> Result<Vec<ServiceAccess>, DomainError> {
        let query = r#"
            SELECT a.id, a.service_key
            FROM accesses a
            JOIN role_accesses ra ON ra.access_id = a.id
            WHERE ra.role_id = ?
            ORDER BY ra.position
        "#;

        let rows = sqlx::query(query)
            .bind(role_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to load role accesses: {}", e),
            })?;

        rows.iter()
            .map(|row| {
                let id: u64 = row.try_get("id").map_err(|e| DomainError::Internal {
                    message: format!("Failed to get access id: {}", e),
                })?;
                let service_key: String =
                    row.try_get("service_key").map_err(|e| DomainError::Internal {
                        message: format!("Failed to get service_key: {}", e),
                    })?;
                Ok(ServiceAccess { id, service_key })
            })
            .collect()
    }
}

#[async_trait]
impl RoleRepository for MySqlRoleRepository {
    async fn find_by_user_id(&self, user_id: u64) -> Result<Option<Role>, DomainError> {
        let query = r#"
            SELECT r.id, r.name
            FROM roles r
            JOIN users u ON u.role_id = r.id
            WHERE u.id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find role: {}", e),
            })?;

        let row = match result {
            Some(row) => row,
            None => return Ok(None),
        };

        let id: u64 = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get role id: {}", e),
        })?;
        let name: String = row.try_get("name").map_err(|e| DomainError::Internal {
            message: format!("Failed to get role name: {}", e),
        })?;

        let accesses = self.load_accesses(id).await?;

        Ok(Some(Role { id, name, accesses }))
    }
}
