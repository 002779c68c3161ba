//! User handlers
//!
//! Endpoints for token balances and user listing.

use axum::{
    extract::{Path, State},
    Json,
};
use care_service::{TokenBalanceResponse, UserListResponse, UserService};

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Get a user's weekly token balance
///
/// GET /users/{user_id}/tokens
pub async fn get_token_balance(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<TokenBalanceResponse>> {
    let user_id = user_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid user_id format"))?;

    let service = UserService::new(state.service_context());
    let response = service.token_balance(user_id).await?;
    Ok(Json(response))
}

/// List all users
///
/// GET /users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UserListResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.list_users().await?;
    Ok(Json(response))
}
