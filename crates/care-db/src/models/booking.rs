//! Booking database models

use care_core::MedicalFlags;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for the bookings table
#[derive(Debug, Clone, FromRow)]
pub struct BookingModel {
    pub id: i64,
    pub user_id: i64,
    pub activity_id: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Joined row for the attendance roster: a Confirmed booking together
/// with its owner, aliased with `booking_`/`user_` prefixes.
#[derive(Debug, Clone, FromRow)]
pub struct RosterRowModel {
    pub booking_id: i64,
    pub booking_user_id: i64,
    pub booking_activity_id: i64,
    pub booking_status: String,
    pub booking_created_at: DateTime<Utc>,
    pub booking_updated_at: DateTime<Utc>,
    pub user_name: String,
    pub user_email: String,
    pub user_role: String,
    pub user_membership_tier: String,
    pub user_medical_flags: Json<MedicalFlags>,
    pub user_linked_account_id: Option<i64>,
    pub user_created_at: DateTime<Utc>,
    pub user_updated_at: DateTime<Utc>,
}
