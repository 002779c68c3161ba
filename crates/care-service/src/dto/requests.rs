//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; bodies with fields to check
//! also implement `Validate`.

use care_core::{ActivityRequirements, Snowflake};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// Create booking request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookingRequest {
    pub user_id: Snowflake,
    pub activity_id: Snowflake,
}

/// Cancel booking request (booking id comes from the path)
#[derive(Debug, Clone, Deserialize)]
pub struct CancelBookingRequest {
    pub user_id: Snowflake,
}

/// Create activity request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateActivityRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    #[serde(default)]
    pub description: String,

    pub start_time: DateTime<Utc>,

    pub end_time: Option<DateTime<Utc>>,

    #[validate(length(max = 200, message = "Location must be at most 200 characters"))]
    #[serde(default)]
    pub location: String,

    #[validate(range(min = 0, message = "base_capacity must be non-negative"))]
    #[serde(default = "default_base_capacity")]
    pub base_capacity: i64,

    #[validate(range(min = 0, message = "volunteer_slots must be non-negative"))]
    #[serde(default)]
    pub volunteer_slots: i64,

    #[serde(default)]
    pub requirements: ActivityRequirements,
}

fn default_base_capacity() -> i64 {
    10
}
