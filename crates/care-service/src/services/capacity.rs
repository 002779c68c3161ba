//! Capacity calculator
//!
//! Derives an activity's effective capacity and attendance from the
//! current set of Confirmed bookings. Every call is a snapshot read
//! against the repository; nothing is cached, so the numbers always
//! reflect the latest committed state.

use care_core::Activity;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Live occupancy numbers for one activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityLoad {
    /// Effective capacity: base + 2 per confirmed volunteer
    pub capacity: i64,
    /// Confirmed non-volunteer bookings
    pub attendees: i64,
    /// Confirmed volunteer bookings
    pub volunteers: i64,
}

impl ActivityLoad {
    /// Seats still open for non-volunteer attendees, floored at zero
    pub fn available_slots(&self) -> i64 {
        (self.capacity - self.attendees).max(0)
    }
}

/// Capacity calculator service
pub struct CapacityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CapacityService<'a> {
    /// Create a new CapacityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Recompute capacity, attendee, and volunteer counts for an activity
    pub async fn load(&self, activity: &Activity) -> ServiceResult<ActivityLoad> {
        let volunteers = self
            .ctx
            .booking_repo()
            .count_confirmed_volunteers(activity.id)
            .await?;
        let attendees = self
            .ctx
            .booking_repo()
            .count_confirmed_attendees(activity.id)
            .await?;

        Ok(ActivityLoad {
            capacity: activity.capacity_with(volunteers),
            attendees,
            volunteers,
        })
    }
}
