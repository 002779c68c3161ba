//! Domain errors - every way a booking request can be refused

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors.
///
/// All booking-rule variants are user-facing refusals, never retried by
/// the system; the caller has to change the underlying condition and
/// resubmit.
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found")]
    UserNotFound(Snowflake),

    #[error("Activity not found")]
    ActivityNotFound(Snowflake),

    #[error("Booking not found or unauthorized")]
    BookingNotFound,

    // =========================================================================
    // Booking Rule Violations
    // =========================================================================
    #[error("You have already booked this activity")]
    DuplicateBooking,

    #[error("Ad-hoc members must complete payment before booking")]
    PaymentRequired,

    #[error("Weekly Token Limit Reached. You have used {used}/{limit} tokens this week.")]
    TokenLimitReached { used: u32, limit: u32 },

    #[error("All volunteer slots are filled ({filled}/{slots})")]
    VolunteerSlotsFull { filled: i64, slots: i64 },

    #[error("Activity at capacity ({attendees}/{capacity} attendees)")]
    ActivityFull { attendees: i64, capacity: i64 },

    #[error("This activity is not wheelchair accessible. Please contact staff for assistance.")]
    AccessibilityMismatch,

    #[error("Booking already cancelled")]
    AlreadyCancelled,

    // =========================================================================
    // Input Validation
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get a stable error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::ActivityNotFound(_) => "ACTIVITY_NOT_FOUND",
            Self::BookingNotFound => "BOOKING_NOT_FOUND",
            Self::DuplicateBooking => "DUPLICATE_BOOKING",
            Self::PaymentRequired => "PAYMENT_REQUIRED",
            Self::TokenLimitReached { .. } => "TOKEN_LIMIT_REACHED",
            Self::VolunteerSlotsFull { .. } => "VOLUNTEER_SLOTS_FULL",
            Self::ActivityFull { .. } => "ACTIVITY_FULL",
            Self::AccessibilityMismatch => "ACCESSIBILITY_MISMATCH",
            Self::AlreadyCancelled => "ALREADY_CANCELLED",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::ActivityNotFound(_) | Self::BookingNotFound
        )
    }

    /// Check if this is a user-facing validation refusal
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::DuplicateBooking
                | Self::PaymentRequired
                | Self::TokenLimitReached { .. }
                | Self::VolunteerSlotsFull { .. }
                | Self::ActivityFull { .. }
                | Self::AccessibilityMismatch
                | Self::AlreadyCancelled
                | Self::ValidationError(_)
        )
    }
}
