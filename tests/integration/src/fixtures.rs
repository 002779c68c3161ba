//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Users are seeded
//! directly through the repository layer (the API exposes no user
//! creation endpoint); activities are created over the wire.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use anyhow::Result;
use care_core::{
    MedicalFlags, MembershipTier, Snowflake, SnowflakeGenerator, User, UserRepository, UserRole,
};
use care_db::{PgPool, PgUserRepository};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

fn id_generator() -> &'static SnowflakeGenerator {
    static GENERATOR: OnceLock<SnowflakeGenerator> = OnceLock::new();
    GENERATOR.get_or_init(|| SnowflakeGenerator::new(511))
}

/// Seed a user directly through the repository and return its id
pub async fn seed_user(
    pool: &PgPool,
    role: UserRole,
    tier: MembershipTier,
    wheelchair: bool,
) -> Result<Snowflake> {
    let id = id_generator().generate();
    let suffix = unique_suffix();
    let mut user = User::new(
        id,
        format!("Test User {suffix}"),
        format!("user{suffix}.{}@example.com", id.into_inner()),
        role,
        tier,
    );
    user.medical_flags = MedicalFlags {
        wheelchair,
        seizure_risk: false,
    };

    PgUserRepository::new(pool.clone())
        .create(&user)
        .await
        .map_err(|e| anyhow::anyhow!("failed to seed user: {e}"))?;

    Ok(id)
}

/// Seed a plain Participant with the given tier
pub async fn seed_participant(pool: &PgPool, tier: MembershipTier) -> Result<Snowflake> {
    seed_user(pool, UserRole::Participant, tier, false).await
}

// ============================================================================
// Requests
// ============================================================================

/// Create booking request
#[derive(Debug, Serialize)]
pub struct CreateBookingRequest {
    pub user_id: String,
    pub activity_id: String,
}

impl CreateBookingRequest {
    pub fn new(user_id: Snowflake, activity_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            activity_id: activity_id.to_string(),
        }
    }
}

/// Cancel booking request
#[derive(Debug, Serialize)]
pub struct CancelBookingRequest {
    pub user_id: String,
}

/// Requirements block for activity creation
#[derive(Debug, Serialize)]
pub struct Requirements {
    pub accessible: bool,
    pub payment_required: bool,
}

/// Create activity request
#[derive(Debug, Serialize)]
pub struct CreateActivityRequest {
    pub title: String,
    pub description: String,
    pub start_time: String,
    pub location: String,
    pub base_capacity: i64,
    pub volunteer_slots: i64,
    pub requirements: Requirements,
}

impl CreateActivityRequest {
    /// An activity starting tomorrow with the given capacity knobs
    pub fn new(base_capacity: i64, volunteer_slots: i64, accessible: bool) -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Activity {suffix}"),
            description: "Integration test activity".to_string(),
            start_time: (Utc::now() + Duration::days(1)).to_rfc3339(),
            location: "Community Hall A".to_string(),
            base_capacity,
            volunteer_slots,
            requirements: Requirements {
                accessible,
                payment_required: false,
            },
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Booking confirmation response
#[derive(Debug, Deserialize)]
pub struct BookingConfirmation {
    pub success: bool,
    pub booking_id: String,
    pub message: String,
    pub details: BookingDetails,
}

/// Details block of a booking confirmation
#[derive(Debug, Deserialize)]
pub struct BookingDetails {
    pub user_name: String,
    pub activity_title: String,
    pub activity_start: String,
    /// A number or a label like "Unlimited" / "N/A (Volunteer)"
    pub tokens_remaining: serde_json::Value,
    pub booking_status: String,
}

/// Cancellation response
#[derive(Debug, Deserialize)]
pub struct CancelConfirmation {
    pub success: bool,
    pub message: String,
    pub booking_id: String,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    pub error_code: String,
}

/// Token balance response
#[derive(Debug, Deserialize)]
pub struct TokenBalance {
    pub user_id: String,
    pub user_name: String,
    pub membership_tier: String,
    pub tokens_total: serde_json::Value,
    pub tokens_used: serde_json::Value,
    pub tokens_remaining: serde_json::Value,
    pub role: String,
}

/// Activity summary in list responses
#[derive(Debug, Deserialize)]
pub struct ActivitySummary {
    pub id: String,
    pub title: String,
    pub base_capacity: i64,
    pub current_capacity: i64,
    pub current_attendees: i64,
    pub available_slots: i64,
    pub volunteer_slots: i64,
    pub is_accessible: bool,
}

/// Activity list response
#[derive(Debug, Deserialize)]
pub struct ActivityList {
    pub activities: Vec<ActivitySummary>,
}

/// Roster entry in activity detail responses
#[derive(Debug, Deserialize)]
pub struct RosterEntry {
    pub booking_id: String,
    pub user_name: String,
    pub user_role: String,
    pub booked_at: String,
}

/// Activity detail response
#[derive(Debug, Deserialize)]
pub struct ActivityDetail {
    pub id: String,
    pub title: String,
    pub current_capacity: i64,
    pub current_attendees: i64,
    pub available_slots: i64,
    pub is_accessible: bool,
    pub bookings: Vec<RosterEntry>,
}

/// Activity creation response
#[derive(Debug, Deserialize)]
pub struct CreateActivityResponse {
    pub success: bool,
    pub activity_id: String,
    pub message: String,
}

/// User listing entry
#[derive(Debug, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub membership_tier: String,
    pub medical_flags: serde_json::Value,
}

/// User list response
#[derive(Debug, Deserialize)]
pub struct UserList {
    pub users: Vec<UserSummary>,
}
