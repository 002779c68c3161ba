//! Activity entity - bookable events and classes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Snowflake, VOLUNTEER_CAPACITY_BONUS};

/// Requirements recorded against an activity.
///
/// Stored as JSON; missing keys default to `false` and unknown keys are
/// ignored on input (and dropped when the record is rewritten).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRequirements {
    #[serde(default)]
    pub accessible: bool,
    #[serde(default)]
    pub payment_required: bool,
}

/// Activity entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: Snowflake,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: String,
    /// Attendee capacity before any volunteer uplift
    pub base_capacity: i64,
    /// Ceiling on confirmed volunteer bookings, separate from capacity
    pub volunteer_slots: i64,
    pub requirements: ActivityRequirements,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Activity {
    /// Create a new Activity with required fields
    pub fn new(id: Snowflake, title: String, start_time: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description: String::new(),
            start_time,
            end_time: None,
            location: String::new(),
            base_capacity: 10,
            volunteer_slots: 0,
            requirements: ActivityRequirements::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the activity is wheelchair accessible.
    /// Missing or empty requirements mean not accessible.
    #[inline]
    pub const fn is_accessible(&self) -> bool {
        self.requirements.accessible
    }

    /// Effective attendee capacity given the current number of confirmed
    /// volunteer bookings: `base_capacity + 2 * volunteer_count`.
    pub fn capacity_with(&self, volunteer_count: i64) -> i64 {
        self.base_capacity + VOLUNTEER_CAPACITY_BONUS * volunteer_count
    }
}
