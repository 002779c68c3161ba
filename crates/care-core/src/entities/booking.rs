//! Booking entity - the reservation joining a user to an activity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Booking status states.
///
/// `Waitlist` is reserved: no code path assigns or promotes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
    Waitlist,
    Cancelled,
}

impl BookingStatus {
    /// Stable string form used in storage and API responses
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Waitlist => "Waitlist",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Parse the stable string form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Confirmed" => Some(Self::Confirmed),
            "Waitlist" => Some(Self::Waitlist),
            "Cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// Booking entity referencing a user and an activity by identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub activity_id: Snowflake,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Create a new Confirmed booking stamped at `created_at`.
    pub fn confirmed(
        id: Snowflake,
        user_id: Snowflake,
        activity_id: Snowflake,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            activity_id,
            status: BookingStatus::Confirmed,
            created_at,
            updated_at: created_at,
        }
    }

    /// Whether the booking currently holds a slot
    #[inline]
    pub const fn is_confirmed(&self) -> bool {
        matches!(self.status, BookingStatus::Confirmed)
    }

    /// Flip to Cancelled at the given instant.
    /// The only status transition the system performs.
    pub fn cancel(&mut self, at: DateTime<Utc>) {
        self.status = BookingStatus::Cancelled;
        self.updated_at = at;
    }
}
