//! Booking handlers
//!
//! Endpoints for creating and cancelling bookings.

use axum::{
    extract::{Path, State},
    Json,
};
use care_service::{
    BookingConfirmationResponse, BookingService, CancelBookingRequest, CancelBookingResponse,
    CreateBookingRequest,
};

use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Create a booking
///
/// POST /bookings
pub async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> ApiResult<Created<Json<BookingConfirmationResponse>>> {
    let service = BookingService::new(state.service_context());
    let response = service
        .attempt_booking(request.user_id, request.activity_id)
        .await?;
    Ok(Created(Json(response)))
}

/// Cancel a booking
///
/// POST /bookings/{booking_id}/cancel
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<String>,
    Json(request): Json<CancelBookingRequest>,
) -> ApiResult<Json<CancelBookingResponse>> {
    let booking_id = booking_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid booking_id format"))?;

    let service = BookingService::new(state.service_context());
    let response = service.cancel_booking(booking_id, request.user_id).await?;
    Ok(Json(response))
}
