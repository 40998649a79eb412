//! Shared test support for token service tests

use chrono::{DateTime, Utc};

use crate::services::token::Clock;

/// Clock pinned to a fixed instant
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
