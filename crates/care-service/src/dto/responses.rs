//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Snowflake IDs
//! serialize as strings. Token figures serialize as a number or a label
//! ("Unlimited", "N/A (Volunteer)") to match the wire contract.

use care_core::{ActivityRequirements, MedicalFlags, MembershipTier, Snowflake, UserRole};
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Token Figures
// ============================================================================

/// A token quantity on the wire: either a count or a textual label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TokenFigure {
    Count(u32),
    Label(&'static str),
}

impl TokenFigure {
    /// Label for unlimited allowances
    pub const fn unlimited() -> Self {
        Self::Label("Unlimited")
    }

    /// Label for fields that do not apply to the user
    pub const fn not_applicable() -> Self {
        Self::Label("N/A")
    }

    /// Label for volunteer remaining-token fields
    pub const fn volunteer() -> Self {
        Self::Label("N/A (Volunteer)")
    }
}

// ============================================================================
// Booking Responses
// ============================================================================

/// Successful booking confirmation
#[derive(Debug, Serialize)]
pub struct BookingConfirmationResponse {
    pub success: bool,
    pub booking_id: Snowflake,
    pub message: String,
    pub details: BookingDetails,
}

/// Details block of a booking confirmation
#[derive(Debug, Serialize)]
pub struct BookingDetails {
    pub user_name: String,
    pub activity_title: String,
    pub activity_start: DateTime<Utc>,
    pub tokens_remaining: TokenFigure,
    pub booking_status: &'static str,
}

/// Successful cancellation confirmation
#[derive(Debug, Serialize)]
pub struct CancelBookingResponse {
    pub success: bool,
    pub message: String,
    pub booking_id: Snowflake,
}

// ============================================================================
// Token Balance Responses
// ============================================================================

/// Weekly token balance for a user
#[derive(Debug, Serialize)]
pub struct TokenBalanceResponse {
    pub user_id: Snowflake,
    pub user_name: String,
    pub membership_tier: MembershipTier,
    pub tokens_total: TokenFigure,
    pub tokens_used: TokenFigure,
    pub tokens_remaining: TokenFigure,
    pub role: UserRole,
}

// ============================================================================
// Activity Responses
// ============================================================================

/// Activity with live capacity numbers
#[derive(Debug, Serialize)]
pub struct ActivitySummaryResponse {
    pub id: Snowflake,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: String,
    pub base_capacity: i64,
    pub current_capacity: i64,
    pub current_attendees: i64,
    pub available_slots: i64,
    pub volunteer_slots: i64,
    pub requirements: ActivityRequirements,
    pub is_accessible: bool,
}

/// Activity list wrapper
#[derive(Debug, Serialize)]
pub struct ActivityListResponse {
    pub activities: Vec<ActivitySummaryResponse>,
}

/// One Confirmed booking on an activity's roster
#[derive(Debug, Serialize)]
pub struct RosterEntryResponse {
    pub booking_id: Snowflake,
    pub user_name: String,
    pub user_role: UserRole,
    pub booked_at: DateTime<Utc>,
}

/// Activity detail with its attendance roster
#[derive(Debug, Serialize)]
pub struct ActivityDetailResponse {
    #[serde(flatten)]
    pub activity: ActivitySummaryResponse,
    pub bookings: Vec<RosterEntryResponse>,
}

/// Successful activity creation
#[derive(Debug, Serialize)]
pub struct CreateActivityResponse {
    pub success: bool,
    pub activity_id: Snowflake,
    pub message: String,
}

// ============================================================================
// User Responses
// ============================================================================

/// User listing entry
#[derive(Debug, Serialize)]
pub struct UserSummaryResponse {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub membership_tier: MembershipTier,
    pub medical_flags: MedicalFlags,
}

/// User list wrapper
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<UserSummaryResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl HealthResponse {
    pub const fn healthy() -> Self {
        Self {
            status: "healthy",
            service: "CareConnect API",
        }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    pub const fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}
