//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every count is a live read against the
//! committed state; nothing here caches.

use async_trait::async_trait;

use crate::entities::{Activity, Booking, User};
use crate::error::DomainError;
use crate::value_objects::{Snowflake, WeekWindow};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// List all users
    async fn list(&self) -> RepoResult<Vec<User>>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Activity Repository
// ============================================================================

#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Find activity by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Activity>>;

    /// List all activities ordered by start time
    async fn list(&self) -> RepoResult<Vec<Activity>>;

    /// Create a new activity
    async fn create(&self, activity: &Activity) -> RepoResult<()>;
}

// ============================================================================
// Booking Repository
// ============================================================================

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find booking by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Booking>>;

    /// Find the Confirmed booking for a (user, activity) pair, if any
    async fn find_confirmed(
        &self,
        user_id: Snowflake,
        activity_id: Snowflake,
    ) -> RepoResult<Option<Booking>>;

    /// Persist a new booking.
    ///
    /// Implementations must surface a concurrent duplicate Confirmed
    /// booking for the same (user, activity) pair as
    /// `DomainError::DuplicateBooking`.
    async fn create(&self, booking: &Booking) -> RepoResult<()>;

    /// Persist a status/timestamp change to an existing booking
    async fn update(&self, booking: &Booking) -> RepoResult<()>;

    /// Count Confirmed bookings on an activity whose owner is a Volunteer
    async fn count_confirmed_volunteers(&self, activity_id: Snowflake) -> RepoResult<i64>;

    /// Count Confirmed bookings on an activity whose owner is NOT a Volunteer
    async fn count_confirmed_attendees(&self, activity_id: Snowflake) -> RepoResult<i64>;

    /// Count a user's Confirmed bookings created inside the week window
    async fn count_confirmed_in_window(
        &self,
        user_id: Snowflake,
        window: WeekWindow,
    ) -> RepoResult<i64>;

    /// Confirmed bookings on an activity joined with their owners,
    /// ordered by creation time (the attendance roster)
    async fn confirmed_with_users(
        &self,
        activity_id: Snowflake,
    ) -> RepoResult<Vec<(Booking, User)>>;
}
