//! Activity database model

use care_core::ActivityRequirements;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for the activities table
#[derive(Debug, Clone, FromRow)]
pub struct ActivityModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: String,
    pub base_capacity: i64,
    pub volunteer_slots: i64,
    pub requirements: Json<ActivityRequirements>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
