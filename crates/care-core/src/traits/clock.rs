//! Clock port - "now" as an explicit collaborator
//!
//! Weekly token windows and booking timestamps are derived from the
//! injected clock, so tests can pin time instead of racing the wall clock.

use chrono::{DateTime, Utc};

/// Source of the current instant, fixed to UTC
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
