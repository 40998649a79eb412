//! Unit tests for revocation entities

use crate::domain::entities::revocation::{RevocationEvent, RevokedToken, MAX_TOKEN_LENGTH};
use crate::errors::ValidationError;

#[test]
fn test_revoked_token_creation() {
    let entry = RevokedToken::new("token-string").unwrap();

    assert_eq!(entry.token, "token-string");
}

#[test]
fn test_revoked_token_rejects_overlong_string() {
    let token = "x".repeat(MAX_TOKEN_LENGTH + 1);

    let result = RevokedToken::new(token);

    assert!(matches!(
        result,
        Err(ValidationError::InvalidLength { actual, .. }) if actual == MAX_TOKEN_LENGTH + 1
    ));
}

#[test]
fn test_revoked_token_accepts_limit_length() {
    let token = "x".repeat(MAX_TOKEN_LENGTH);

    assert!(RevokedToken::new(token).is_ok());
}

#[test]
fn test_revocation_event_wire_shape() {
    let event: RevocationEvent = serde_json::from_str(r#"{"token":"tok1"}"#).unwrap();

    assert_eq!(event.token, "tok1");
}

#[test]
fn test_revocation_event_rejects_missing_token() {
    let result = serde_json::from_str::<RevocationEvent>(r#"{"other":"value"}"#);

    assert!(result.is_err());
}
