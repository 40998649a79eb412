//! Mock implementation of RevocationRepository for testing

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::revocation::RevokedToken;
use crate::errors::DomainError;

use super::r#trait::RevocationRepository;

/// In-memory revocation repository for testing.
///
/// The check-and-insert runs inside a single write-lock critical section,
/// so concurrent duplicate inserts observe the same entry.
pub struct MockRevocationRepository {
    entries: Arc<RwLock<HashMap<String, RevokedToken>>>,
}

impl MockRevocationRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of entries currently stored
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl Default for MockRevocationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RevocationRepository for MockRevocationRepository {
    async fn insert_if_absent(&self, token: &str) -> Result<RevokedToken, DomainError> {
        let mut entries = self.entries.write().await;

        if let Some(existing) = entries.get(token) {
            return Ok(existing.clone());
        }

        let entry = RevokedToken::new(token)?;
        entries.insert(token.to_string(), entry.clone());
        Ok(entry)
    }

    async fn list_all(&self) -> Result<HashSet<String>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries.keys().cloned().collect())
    }

    async fn find(&self, token: &str) -> Result<Option<RevokedToken>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries.get(token).cloned())
    }
}
