//! Activity service - listing, detail, and creation
//!
//! The read side of the booking engine: every capacity number in a
//! response is recomputed from live counts at request time.

use care_core::{Activity, DomainError, Snowflake};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{
    activity_summary, roster_entry, ActivityDetailResponse, ActivityListResponse,
    CreateActivityRequest, CreateActivityResponse,
};

use super::capacity::CapacityService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Activity service
pub struct ActivityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ActivityService<'a> {
    /// Create a new ActivityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all activities with live capacity numbers.
    ///
    /// When a filter user is given and that user requires wheelchair
    /// access, inaccessible activities are left out of the view. The
    /// stored activities are never touched; an unknown filter user just
    /// means no filtering.
    #[instrument(skip(self))]
    pub async fn list_activities(
        &self,
        filter_user_id: Option<Snowflake>,
    ) -> ServiceResult<ActivityListResponse> {
        let mut activities = self.ctx.activity_repo().list().await?;

        if let Some(user_id) = filter_user_id {
            if let Some(user) = self.ctx.user_repo().find_by_id(user_id).await? {
                if user.requires_wheelchair() {
                    activities.retain(Activity::is_accessible);
                }
            }
        }

        let capacity = CapacityService::new(self.ctx);
        let mut summaries = Vec::with_capacity(activities.len());
        for activity in &activities {
            let load = capacity.load(activity).await?;
            summaries.push(activity_summary(activity, load));
        }

        Ok(ActivityListResponse {
            activities: summaries,
        })
    }

    /// Get one activity with its Confirmed-booking roster
    #[instrument(skip(self))]
    pub async fn get_activity(&self, activity_id: Snowflake) -> ServiceResult<ActivityDetailResponse> {
        let activity = self
            .ctx
            .activity_repo()
            .find_by_id(activity_id)
            .await?
            .ok_or(DomainError::ActivityNotFound(activity_id))?;

        let load = CapacityService::new(self.ctx).load(&activity).await?;
        let roster = self
            .ctx
            .booking_repo()
            .confirmed_with_users(activity_id)
            .await?;

        Ok(ActivityDetailResponse {
            activity: activity_summary(&activity, load),
            bookings: roster
                .iter()
                .map(|(booking, user)| roster_entry(booking, user))
                .collect(),
        })
    }

    /// Create a new activity
    #[instrument(skip(self, request))]
    pub async fn create_activity(
        &self,
        request: CreateActivityRequest,
    ) -> ServiceResult<CreateActivityResponse> {
        request.validate()?;

        let now = self.ctx.clock().now();
        let activity = Activity {
            id: self.ctx.generate_id(),
            title: request.title,
            description: request.description,
            start_time: request.start_time,
            end_time: request.end_time,
            location: request.location,
            base_capacity: request.base_capacity,
            volunteer_slots: request.volunteer_slots,
            requirements: request.requirements,
            created_at: now,
            updated_at: now,
        };

        self.ctx.activity_repo().create(&activity).await?;

        info!(activity_id = %activity.id, title = %activity.title, "Activity created");

        Ok(CreateActivityResponse {
            success: true,
            activity_id: activity.id,
            message: "Activity created successfully".to_string(),
        })
    }
}
