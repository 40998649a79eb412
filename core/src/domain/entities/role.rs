//! Role and service access entities.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Maximum length of a role name
pub const MAX_ROLE_NAME_LENGTH: usize = 100;

/// Maximum length of a service key
pub const MAX_SERVICE_KEY_LENGTH: usize = 250;

/// An access grant to a single downstream service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAccess {
    /// Unique identifier
    pub id: u64,

    /// Identifier of the downstream service this access grants
    pub service_key: String,
}

impl ServiceAccess {
    /// Creates a new service access
    ///
    /// # Returns
    ///
    /// * `Ok(ServiceAccess)` - The access grant
    /// * `Err(ValidationError)` - Service key exceeds the column limit
    pub fn new(id: u64, service_key: impl Into<String>) -> Result<Self, ValidationError> {
        let service_key = service_key.into();
        if service_key.len() > MAX_SERVICE_KEY_LENGTH {
            return Err(ValidationError::InvalidLength {
                field: String::from("service_key"),
                max: MAX_SERVICE_KEY_LENGTH,
                actual: service_key.len(),
            });
        }

        Ok(Self { id, service_key })
    }
}

/// A role granting an ordered list of service accesses.
///
/// The access order is part of the role: callers display keys in the order
/// they were attached, so the list is never sorted or deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Unique identifier
    pub id: u64,

    /// Human-readable role name
    pub name: String,

    /// Accesses granted by this role, in attachment order
    pub accesses: Vec<ServiceAccess>,
}

impl Role {
    /// Creates a new role
    ///
    /// # Returns
    ///
    /// * `Ok(Role)` - The role
    /// * `Err(ValidationError)` - Role name exceeds the column limit
    pub fn new(
        id: u64,
        name: impl Into<String>,
        accesses: Vec<ServiceAccess>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.len() > MAX_ROLE_NAME_LENGTH {
            return Err(ValidationError::InvalidLength {
                field: String::from("name"),
                max: MAX_ROLE_NAME_LENGTH,
                actual: name.len(),
            });
        }

        Ok(Self { id, name, accesses })
    }

    /// Returns the granted service keys in role order
    pub fn service_keys(&self) -> Vec<String> {
        self.accesses
            .iter()
            .map(|access| access.service_key.clone())
            .collect()
    }
}
