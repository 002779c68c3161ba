//! Activity model -> entity mapper

use care_core::{Activity, RepoResult, Snowflake};

use crate::models::ActivityModel;

/// Convert an activities row to an Activity entity
pub fn activity_from_model(model: ActivityModel) -> RepoResult<Activity> {
    Ok(Activity {
        id: Snowflake::new(model.id),
        title: model.title,
        description: model.description,
        start_time: model.start_time,
        end_time: model.end_time,
        location: model.location,
        base_capacity: model.base_capacity,
        volunteer_slots: model.volunteer_slots,
        requirements: model.requirements.0,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}
