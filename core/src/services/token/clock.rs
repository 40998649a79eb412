//! Injectable time source for token services

use chrono::{DateTime, Utc};

/// Supplies the current UTC instant.
///
/// Injected into the token services so freshness decisions can be pinned in
/// tests instead of racing the wall clock.
pub trait Clock: Send + Sync {
    /// Current UTC instant
    fn now(&self) -> DateTime<Utc>;
}

/// System wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
