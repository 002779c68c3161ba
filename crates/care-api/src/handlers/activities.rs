//! Activity handlers
//!
//! Endpoints for listing, inspecting, and creating activities.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use care_core::Snowflake;
use care_service::{
    ActivityDetailResponse, ActivityListResponse, ActivityService, CreateActivityRequest,
    CreateActivityResponse,
};
use serde::Deserialize;

use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Query parameters for activity listing
#[derive(Debug, Deserialize)]
pub struct ListActivitiesQuery {
    /// Filter the view for this user's accessibility needs
    pub user_id: Option<String>,
}

/// List activities with live capacity numbers
///
/// GET /activities?user_id=
pub async fn list_activities(
    State(state): State<AppState>,
    Query(query): Query<ListActivitiesQuery>,
) -> ApiResult<Json<ActivityListResponse>> {
    let filter_user_id = query
        .user_id
        .map(|raw| {
            raw.parse::<Snowflake>()
                .map_err(|_| ApiError::invalid_query("Invalid user_id format"))
        })
        .transpose()?;

    let service = ActivityService::new(state.service_context());
    let response = service.list_activities(filter_user_id).await?;
    Ok(Json(response))
}

/// Get activity details with its booking roster
///
/// GET /activities/{activity_id}
pub async fn get_activity(
    State(state): State<AppState>,
    Path(activity_id): Path<String>,
) -> ApiResult<Json<ActivityDetailResponse>> {
    let activity_id = activity_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid activity_id format"))?;

    let service = ActivityService::new(state.service_context());
    let response = service.get_activity(activity_id).await?;
    Ok(Json(response))
}

/// Create an activity
///
/// POST /activities
pub async fn create_activity(
    State(state): State<AppState>,
    Json(request): Json<CreateActivityRequest>,
) -> ApiResult<Created<Json<CreateActivityResponse>>> {
    let service = ActivityService::new(state.service_context());
    let response = service.create_activity(request).await?;
    Ok(Created(Json(response)))
}
