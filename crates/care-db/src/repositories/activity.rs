//! PostgreSQL implementation of ActivityRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use care_core::{Activity, ActivityRepository, RepoResult, Snowflake};

use crate::mappers::activity_from_model;
use crate::models::ActivityModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ActivityRepository
#[derive(Clone)]
pub struct PgActivityRepository {
    pool: PgPool,
}

impl PgActivityRepository {
    /// Create a new PgActivityRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRepository for PgActivityRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Activity>> {
        let result = sqlx::query_as::<_, ActivityModel>(
            r"
            SELECT id, title, description, start_time, end_time, location,
                   base_capacity, volunteer_slots, requirements, created_at, updated_at
            FROM activities
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(activity_from_model).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Activity>> {
        let results = sqlx::query_as::<_, ActivityModel>(
            r"
            SELECT id, title, description, start_time, end_time, location,
                   base_capacity, volunteer_slots, requirements, created_at, updated_at
            FROM activities
            ORDER BY start_time, id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(activity_from_model).collect()
    }

    #[instrument(skip(self))]
    async fn create(&self, activity: &Activity) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO activities (id, title, description, start_time, end_time, location,
                                    base_capacity, volunteer_slots, requirements,
                                    created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(activity.id.into_inner())
        .bind(&activity.title)
        .bind(&activity.description)
        .bind(activity.start_time)
        .bind(activity.end_time)
        .bind(&activity.location)
        .bind(activity.base_capacity)
        .bind(activity.volunteer_slots)
        .bind(Json(activity.requirements))
        .bind(activity.created_at)
        .bind(activity.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
