//! PostgreSQL implementation of BookingRepository
//!
//! All counts are live queries against the committed bookings table;
//! there are no cached counters to invalidate.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use care_core::{
    Booking, BookingRepository, DomainError, RepoResult, Snowflake, User, WeekWindow,
};

use crate::mappers::{booking_from_model, roster_entry_from_row};
use crate::models::{BookingModel, RosterRowModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of BookingRepository
#[derive(Clone)]
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    /// Create a new PgBookingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Booking>> {
        let result = sqlx::query_as::<_, BookingModel>(
            r"
            SELECT id, user_id, activity_id, status, created_at, updated_at
            FROM bookings
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(booking_from_model).transpose()
    }

    #[instrument(skip(self))]
    async fn find_confirmed(
        &self,
        user_id: Snowflake,
        activity_id: Snowflake,
    ) -> RepoResult<Option<Booking>> {
        let result = sqlx::query_as::<_, BookingModel>(
            r"
            SELECT id, user_id, activity_id, status, created_at, updated_at
            FROM bookings
            WHERE user_id = $1 AND activity_id = $2 AND status = 'Confirmed'
            ",
        )
        .bind(user_id.into_inner())
        .bind(activity_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(booking_from_model).transpose()
    }

    #[instrument(skip(self))]
    async fn create(&self, booking: &Booking) -> RepoResult<()> {
        // The partial unique index on (user_id, activity_id) WHERE
        // status = 'Confirmed' turns a concurrent duplicate into a
        // unique violation here.
        sqlx::query(
            r"
            INSERT INTO bookings (id, user_id, activity_id, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(booking.id.into_inner())
        .bind(booking.user_id.into_inner())
        .bind(booking.activity_id.into_inner())
        .bind(booking.status.as_str())
        .bind(booking.created_at)
        .bind(booking.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateBooking))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, booking: &Booking) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE bookings
            SET status = $2, updated_at = $3
            WHERE id = $1
            ",
        )
        .bind(booking.id.into_inner())
        .bind(booking.status.as_str())
        .bind(booking.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::BookingNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_confirmed_volunteers(&self, activity_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM bookings b
            JOIN users u ON u.id = b.user_id
            WHERE b.activity_id = $1
              AND b.status = 'Confirmed'
              AND u.role = 'Volunteer'
            ",
        )
        .bind(activity_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn count_confirmed_attendees(&self, activity_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM bookings b
            JOIN users u ON u.id = b.user_id
            WHERE b.activity_id = $1
              AND b.status = 'Confirmed'
              AND u.role <> 'Volunteer'
            ",
        )
        .bind(activity_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn count_confirmed_in_window(
        &self,
        user_id: Snowflake,
        window: WeekWindow,
    ) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM bookings
            WHERE user_id = $1
              AND status = 'Confirmed'
              AND created_at >= $2
              AND created_at < $3
            ",
        )
        .bind(user_id.into_inner())
        .bind(window.start())
        .bind(window.end())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn confirmed_with_users(
        &self,
        activity_id: Snowflake,
    ) -> RepoResult<Vec<(Booking, User)>> {
        let rows = sqlx::query_as::<_, RosterRowModel>(
            r"
            SELECT b.id          AS booking_id,
                   b.user_id     AS booking_user_id,
                   b.activity_id AS booking_activity_id,
                   b.status      AS booking_status,
                   b.created_at  AS booking_created_at,
                   b.updated_at  AS booking_updated_at,
                   u.name            AS user_name,
                   u.email           AS user_email,
                   u.role            AS user_role,
                   u.membership_tier AS user_membership_tier,
                   u.medical_flags   AS user_medical_flags,
                   u.linked_account_id AS user_linked_account_id,
                   u.created_at      AS user_created_at,
                   u.updated_at      AS user_updated_at
            FROM bookings b
            JOIN users u ON u.id = b.user_id
            WHERE b.activity_id = $1 AND b.status = 'Confirmed'
            ORDER BY b.created_at, b.id
            ",
        )
        .bind(activity_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(roster_entry_from_row).collect()
    }
}
