//! Live clock using the system clock.

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;

/// Live clock that returns the real current time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
