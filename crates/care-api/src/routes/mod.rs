//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{activities, bookings, health, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(booking_routes())
        .merge(activity_routes())
        .merge(user_routes())
}

/// Booking routes
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(bookings::create_booking))
        .route("/bookings/:booking_id/cancel", post(bookings::cancel_booking))
}

/// Activity routes
fn activity_routes() -> Router<AppState> {
    Router::new()
        .route("/activities", get(activities::list_activities))
        .route("/activities", post(activities::create_activity))
        .route("/activities/:activity_id", get(activities::get_activity))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/users/:user_id/tokens", get(users::get_token_balance))
}
