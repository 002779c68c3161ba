//! Booking gate - serializes booking attempts per activity
//!
//! Capacity, token, and duplicate checks are all derived from live
//! counts, so two concurrent attempts racing for the same last slot must
//! not both pass. Holding the per-activity lock across read-check-write
//! makes each attempt one logical unit of work. Locking by activity id
//! also covers the (user, activity) duplicate race, since both attempts
//! name the same activity.

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use care_core::Snowflake;

/// Keyed async mutex: one lock per activity id.
///
/// Entries are created on first use and kept for the process lifetime;
/// the set of activities is small and bounded.
#[derive(Default)]
pub struct BookingGate {
    locks: DashMap<i64, Arc<Mutex<()>>>,
}

impl BookingGate {
    /// Create an empty gate
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock for an activity, waiting if another attempt on
    /// the same activity is in flight.
    pub async fn lock(&self, activity_id: Snowflake) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(activity_id.into_inner())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }
}
