//! Revocation-list entities and the inbound revocation event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Maximum length of a revoked token string (storage column limit)
pub const MAX_TOKEN_LENGTH: usize = 250;

/// A token string known to be revoked.
///
/// The token string itself is the identity: the same string is never stored
/// twice, and inserting it again yields the already-present entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokedToken {
    /// Exact string form of the revoked token
    pub token: String,

    /// Timestamp when the revocation was recorded
    pub revoked_at: DateTime<Utc>,
}

impl RevokedToken {
    /// Creates a new revocation entry
    ///
    /// # Arguments
    ///
    /// * `token` - Exact token string to revoke
    ///
    /// # Returns
    ///
    /// * `Ok(RevokedToken)` - Entry stamped with the current time
    /// * `Err(ValidationError)` - Token string exceeds the column limit
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into();
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(ValidationError::InvalidLength {
                field: String::from("token"),
                max: MAX_TOKEN_LENGTH,
                actual: token.len(),
            });
        }

        Ok(Self {
            token,
            revoked_at: Utc::now(),
        })
    }
}

/// An externally delivered revocation event.
///
/// Wire shape is a JSON object with a single `token` field. The event is
/// transient: parsed once, applied to the revocation store, then
/// acknowledged or negatively acknowledged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevocationEvent {
    /// Token string to revoke
    pub token: String,
}
