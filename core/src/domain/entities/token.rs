//! Access token claims for service-to-service authorization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims structure embedded in a signed access token.
///
/// The payload carries the list of service keys the bearer may call and the
/// instant the token was issued. Both fields are optional on the decode
/// side: a token with a valid signature may still omit either claim, and
/// the validity checks treat the omission as a plain rejection rather than
/// a decode failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Service keys the bearer is granted, in role order. Duplicates are
    /// kept and the order is never normalized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accesses: Option<Vec<String>>,

    /// Issuance instant as UTC epoch seconds with sub-second precision
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<f64>,
}

impl AccessClaims {
    /// Creates claims for a freshly issued token
    ///
    /// # Arguments
    ///
    /// * `accesses` - Service keys granted by the bearer's role, in role order
    /// * `issued_at` - Issuance instant from the clock source
    pub fn new(accesses: Vec<String>, issued_at: DateTime<Utc>) -> Self {
        Self {
            accesses: Some(accesses),
            creation_date: Some(issued_at.timestamp_micros() as f64 / 1_000_000.0),
        }
    }

    /// Checks whether the claims grant access to a service key.
    ///
    /// Exact, case-sensitive match anywhere in the access list. Missing or
    /// empty lists grant nothing.
    pub fn grants_access(&self, service_key: &str) -> bool {
        match &self.accesses {
            Some(accesses) => accesses.iter().any(|key| key == service_key),
            None => false,
        }
    }

    /// Returns the issuance instant, if the claim is present and in range
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let timestamp = self.creation_date?;
        if !timestamp.is_finite() {
            return None;
        }
        let secs = timestamp.floor();
        let nanos = ((timestamp - secs) * 1_000_000_000.0) as u32;
        DateTime::from_timestamp(secs as i64, nanos)
    }

    /// Elapsed time since issuance, truncated to whole days.
    ///
    /// `None` when the creation claim is absent or unusable. A future
    /// issuance instant truncates to a non-positive count.
    pub fn elapsed_whole_days(&self, now: DateTime<Utc>) -> Option<i64> {
        let created_at = self.created_at()?;
        Some((now - created_at).num_days())
    }

    /// Checks the day-granularity freshness window.
    ///
    /// The policy counts whole elapsed days, not a duration threshold: with
    /// a one-day window, 47h59m of age is day 1 and still fresh, while
    /// 48h01m is day 2 and stale.
    pub fn is_fresh(&self, now: DateTime<Utc>, window_days: i64) -> bool {
        match self.elapsed_whole_days(now) {
            Some(days) => days <= window_days,
            None => false,
        }
    }
}
