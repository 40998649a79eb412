//! Unit tests for the authentication service

use std::sync::Arc;

use crate::domain::entities::role::{Role, ServiceAccess};
use crate::errors::DomainError;
use crate::repositories::revocation::mock::MockRevocationRepository;
use crate::repositories::role::mock::MockRoleRepository;
use crate::repositories::RevocationRepository;
use crate::services::auth::AuthService;
use crate::services::token::{TokenConfig, TokenService};

fn billing_role() -> Role {
    Role::new(
        1,
        "billing-reader",
        vec![
            ServiceAccess::new(1, "svc-a").unwrap(),
            ServiceAccess::new(2, "svc-b").unwrap(),
        ],
    )
    .unwrap()
}

async fn service_with_role(
    user_id: u64,
    role: Role,
) -> (
    AuthService<MockRoleRepository, MockRevocationRepository>,
    Arc<MockRevocationRepository>,
) {
    let roles = MockRoleRepository::new();
    roles.assign(user_id, role).await;
    let revocations = Arc::new(MockRevocationRepository::new());
    let tokens = TokenService::new(TokenConfig::new("test-secret"));

    (
        AuthService::new(roles, Arc::clone(&revocations), tokens),
        revocations,
    )
}

#[tokio::test]
async fn test_issue_for_user_scopes_token_to_role() {
    let (service, _revocations) = service_with_role(42, billing_role()).await;

    let token = service.issue_for_user(42).await.unwrap();

    assert!(service.validate(&token, "svc-a").await.unwrap());
    assert!(service.validate(&token, "svc-b").await.unwrap());
    assert!(!service.validate(&token, "svc-c").await.unwrap());
}

#[tokio::test]
async fn test_issue_for_user_without_role_is_not_found() {
    let (service, _revocations) = service_with_role(42, billing_role()).await;

    let result = service.issue_for_user(7).await;

    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_validate_rejects_revoked_token() {
    let (service, revocations) = service_with_role(42, billing_role()).await;
    let token = service.issue_for_user(42).await.unwrap();

    assert!(service.validate(&token, "svc-a").await.unwrap());

    revocations.insert_if_absent(&token).await.unwrap();

    assert!(!service.validate(&token, "svc-a").await.unwrap());
}

#[tokio::test]
async fn test_validate_rejects_garbage_without_error() {
    let (service, _revocations) = service_with_role(42, billing_role()).await;

    assert!(!service.validate("garbage", "svc-a").await.unwrap());
}
