//! Booking model -> entity mappers

use care_core::{Booking, BookingStatus, DomainError, RepoResult, Snowflake, User};

use crate::models::{BookingModel, RosterRowModel, UserModel};
use sqlx::types::Json;

use super::user_from_model;

/// Convert a bookings row to a Booking entity
pub fn booking_from_model(model: BookingModel) -> RepoResult<Booking> {
    let status = BookingStatus::parse(&model.status).ok_or_else(|| {
        DomainError::DatabaseError(format!("unknown booking status '{}'", model.status))
    })?;

    Ok(Booking {
        id: Snowflake::new(model.id),
        user_id: Snowflake::new(model.user_id),
        activity_id: Snowflake::new(model.activity_id),
        status,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

/// Split a joined roster row into its booking and owner entities
pub fn roster_entry_from_row(row: RosterRowModel) -> RepoResult<(Booking, User)> {
    let booking = booking_from_model(BookingModel {
        id: row.booking_id,
        user_id: row.booking_user_id,
        activity_id: row.booking_activity_id,
        status: row.booking_status,
        created_at: row.booking_created_at,
        updated_at: row.booking_updated_at,
    })?;

    let user = user_from_model(UserModel {
        id: row.booking_user_id,
        name: row.user_name,
        email: row.user_email,
        role: row.user_role,
        membership_tier: row.user_membership_tier,
        medical_flags: Json(row.user_medical_flags.0),
        linked_account_id: row.user_linked_account_id,
        created_at: row.user_created_at,
        updated_at: row.user_updated_at,
    })?;

    Ok((booking, user))
}
