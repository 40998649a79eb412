//! Unit tests for access token claims

use chrono::{Duration, TimeZone, Utc};

use crate::domain::entities::token::AccessClaims;

#[test]
fn test_new_claims_carry_access_order() {
    let now = Utc::now();
    let claims = AccessClaims::new(
        vec!["svc-b".to_string(), "svc-a".to_string(), "svc-b".to_string()],
        now,
    );

    assert_eq!(
        claims.accesses,
        Some(vec![
            "svc-b".to_string(),
            "svc-a".to_string(),
            "svc-b".to_string()
        ])
    );
}

#[test]
fn test_creation_date_round_trips_with_subsecond_precision() {
    let issued_at = Utc.with_ymd_and_hms(2024, 5, 10, 12, 30, 45).unwrap()
        + Duration::milliseconds(250);
    let claims = AccessClaims::new(vec![], issued_at);

    let recovered = claims.created_at().unwrap();
    assert!((recovered - issued_at).num_milliseconds().abs() <= 1);
}

#[test]
fn test_grants_access_exact_match_only() {
    let claims = AccessClaims::new(
        vec!["svc-a".to_string(), "svc-b".to_string()],
        Utc::now(),
    );

    assert!(claims.grants_access("svc-a"));
    assert!(claims.grants_access("svc-b"));
    assert!(!claims.grants_access("svc-c"));
    assert!(!claims.grants_access("SVC-A"));
}

#[test]
fn test_grants_access_empty_or_missing_list() {
    let empty = AccessClaims::new(vec![], Utc::now());
    assert!(!empty.grants_access("svc-a"));

    let missing = AccessClaims {
        accesses: None,
        creation_date: Some(Utc::now().timestamp() as f64),
    };
    assert!(!missing.grants_access("svc-a"));
}

#[test]
fn test_elapsed_whole_days_truncates() {
    let now = Utc::now();

    let half_day_old = AccessClaims::new(vec![], now - Duration::hours(12));
    assert_eq!(half_day_old.elapsed_whole_days(now), Some(0));

    let just_under_two_days = AccessClaims::new(vec![], now - Duration::hours(47));
    assert_eq!(just_under_two_days.elapsed_whole_days(now), Some(1));

    let two_days_old = AccessClaims::new(vec![], now - Duration::hours(49));
    assert_eq!(two_days_old.elapsed_whole_days(now), Some(2));
}

#[test]
fn test_freshness_window_boundaries() {
    let now = Utc::now();

    assert!(AccessClaims::new(vec![], now - Duration::minutes(1439)).is_fresh(now, 1));
    assert!(AccessClaims::new(vec![], now - Duration::minutes(1441)).is_fresh(now, 1));
    assert!(!AccessClaims::new(vec![], now - Duration::days(2)).is_fresh(now, 1));
}

#[test]
fn test_future_creation_date_is_fresh() {
    let now = Utc::now();
    let future = AccessClaims::new(vec![], now + Duration::hours(5));

    assert!(future.is_fresh(now, 1));
}

#[test]
fn test_missing_creation_date_is_never_fresh() {
    let claims = AccessClaims {
        accesses: Some(vec!["svc-a".to_string()]),
        creation_date: None,
    };

    assert_eq!(claims.elapsed_whole_days(Utc::now()), None);
    assert!(!claims.is_fresh(Utc::now(), 1));
}

#[test]
fn test_non_finite_creation_date_is_rejected() {
    let claims = AccessClaims {
        accesses: None,
        creation_date: Some(f64::NAN),
    };

    assert!(claims.created_at().is_none());
    assert!(!claims.is_fresh(Utc::now(), 1));
}

#[test]
fn test_claims_serialization_round_trip() {
    let claims = AccessClaims::new(vec!["svc-a".to_string()], Utc::now());

    let json = serde_json::to_string(&claims).unwrap();
    let deserialized: AccessClaims = serde_json::from_str(&json).unwrap();

    assert_eq!(claims, deserialized);
}

#[test]
fn test_claims_deserialize_with_missing_fields() {
    let claims: AccessClaims = serde_json::from_str("{}").unwrap();

    assert_eq!(claims.accesses, None);
    assert_eq!(claims.creation_date, None);
}
