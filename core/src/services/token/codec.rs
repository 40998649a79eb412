//! Signing and verification of access token claims

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::AccessClaims;
use crate::errors::{DomainError, TokenError};

use super::config::TokenConfig;

/// Builds and signs token claims; parses and verifies presented tokens.
///
/// Purely structural and cryptographic: the codec never evaluates expiry or
/// revocation. Freshness is not carried as an `exp` claim, so the standard
/// registered-claim checks are disabled and the validity evaluator applies
/// the day-granularity policy on top of the decoded claims.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    header: Header,
}

impl TokenCodec {
    /// Creates a codec from the token configuration
    pub fn new(config: &TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key,
            decoding_key,
            validation,
            header: Header::new(config.algorithm),
        }
    }

    /// Signs claims into a token string
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed token
    /// * `Err(DomainError)` - Token generation failed
    pub fn encode(&self, claims: &AccessClaims) -> Result<String, DomainError> {
        encode(&self.header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies signature and structure of a presented token
    ///
    /// # Returns
    ///
    /// * `Ok(AccessClaims)` - The decoded claims
    /// * `Err(DomainError)` - Signature did not verify or the token is malformed
    pub fn decode(&self, token: &str) -> Result<AccessClaims, DomainError> {
        let token_data = decode::<AccessClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::InvalidSignature {
                    DomainError::Token(TokenError::InvalidSignature)
                } else {
                    DomainError::Token(TokenError::InvalidTokenFormat)
                }
            })?;

        Ok(token_data.claims)
    }
}
