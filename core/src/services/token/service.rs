//! Main token service implementation

use std::collections::HashSet;

use tracing::debug;

use crate::domain::entities::token::AccessClaims;
use crate::errors::DomainError;

use super::clock::{Clock, SystemClock};
use super::codec::TokenCodec;
use super::config::TokenConfig;

/// Service for issuing and validating signed access tokens.
///
/// Issuance and validation are stateless; the service can be shared freely
/// across concurrent requests. The revocation set is passed in by the
/// caller, so no storage access happens here.
pub struct TokenService<C: Clock = SystemClock> {
    codec: TokenCodec,
    clock: C,
    freshness_window_days: i64,
}

impl TokenService<SystemClock> {
    /// Creates a token service using the system clock
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration (secret, algorithm, window)
    pub fn new(config: TokenConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> TokenService<C> {
    /// Creates a token service with an explicit clock source
    pub fn with_clock(config: TokenConfig, clock: C) -> Self {
        Self {
            codec: TokenCodec::new(&config),
            clock,
            freshness_window_days: config.freshness_window_days,
        }
    }

    /// Issues a signed token granting the given service keys.
    ///
    /// The access list is embedded as provided: order preserved, duplicates
    /// kept. The issuance instant comes from the injected clock.
    ///
    /// # Arguments
    ///
    /// * `accesses` - Service keys the bearer's role grants, in role order
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed token
    /// * `Err(DomainError)` - Token generation failed
    pub fn issue(&self, accesses: Vec<String>) -> Result<String, DomainError> {
        let claims = AccessClaims::new(accesses, self.clock.now());
        self.codec.encode(&claims)
    }

    /// Decodes a presented token, verifying signature and structure only.
    ///
    /// # Returns
    ///
    /// * `Ok(AccessClaims)` - The decoded claims
    /// * `Err(DomainError)` - Signature or structure invalid
    pub fn decode_claims(&self, token: &str) -> Result<AccessClaims, DomainError> {
        self.codec.decode(token)
    }

    /// Checks whether a token grants access to a service key.
    ///
    /// Decode failures fold into `false`; a forged token is simply a token
    /// that grants nothing.
    pub fn verify_access(&self, service_key: &str, token: &str) -> bool {
        match self.codec.decode(token) {
            Ok(claims) => claims.grants_access(service_key),
            Err(error) => {
                debug!(%error, "access check failed to decode token");
                false
            }
        }
    }

    /// Checks whether a token is still valid.
    ///
    /// Revocation is checked first against the exact string form and always
    /// wins, even for tokens that no longer decode. A decodable token must
    /// then carry a `creation_date` inside the freshness window.
    pub fn verify_validity(&self, token: &str, revoked_tokens: &HashSet<String>) -> bool {
        if revoked_tokens.contains(token) {
            debug!("token rejected: revoked");
            return false;
        }

        let claims = match self.codec.decode(token) {
            Ok(claims) => claims,
            Err(error) => {
                debug!(%error, "validity check failed to decode token");
                return false;
            }
        };

        claims.is_fresh(self.clock.now(), self.freshness_window_days)
    }

    /// Combined validation for an inbound request.
    ///
    /// The token must be valid (unrevoked and fresh) and must grant the
    /// requested service key. Short-circuits on the first failure.
    pub fn check(&self, token: &str, service_key: &str, revoked_tokens: &HashSet<String>) -> bool {
        self.verify_validity(token, revoked_tokens) && self.verify_access(service_key, token)
    }
}
