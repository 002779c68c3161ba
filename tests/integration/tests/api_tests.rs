//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use care_core::{MembershipTier, UserRole};
use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Create an activity over the wire and return its id
async fn create_activity(
    server: &TestServer,
    base_capacity: i64,
    volunteer_slots: i64,
    accessible: bool,
) -> String {
    let request = CreateActivityRequest::new(base_capacity, volunteer_slots, accessible);
    let response = server.post("/api/v1/activities", &request).await.unwrap();
    let created: CreateActivityResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(created.success);
    created.activity_id
}

/// Book and expect a confirmation
async fn book_ok(server: &TestServer, request: &CreateBookingRequest) -> BookingConfirmation {
    let response = server.post("/api/v1/bookings", request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

/// Book and expect a refusal with the given status and code
async fn book_err(
    server: &TestServer,
    request: &CreateBookingRequest,
    status: StatusCode,
    code: &str,
) -> ErrorBody {
    let response = server.post("/api/v1/bookings", request).await.unwrap();
    let error: ErrorBody = assert_json(response, status).await.unwrap();
    assert!(!error.success);
    assert_eq!(error.error_code, code);
    error
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Booking Tests
// ============================================================================

#[tokio::test]
async fn test_booking_succeeds_with_confirmation_details() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = seed_participant(&server.pool, MembershipTier::Weekly2)
        .await
        .unwrap();
    let activity = create_activity(&server, 10, 0, true).await;

    let confirmation = book_ok(&server, &CreateBookingRequest::new(user, &activity)).await;
    assert_eq!(confirmation.details.booking_status, "Confirmed");
    assert_eq!(confirmation.details.tokens_remaining, serde_json::json!(1));
    assert_eq!(confirmation.message, "Booking confirmed successfully");
}

#[tokio::test]
async fn test_booking_unknown_user_is_404() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let activity = create_activity(&server, 10, 0, true).await;

    let request = CreateBookingRequest {
        user_id: "999999999999".to_string(),
        activity_id: activity,
    };
    let response = server.post("/api/v1/bookings", &request).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error_code, "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_duplicate_booking_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = seed_participant(&server.pool, MembershipTier::Unlimited)
        .await
        .unwrap();
    let activity = create_activity(&server, 10, 0, true).await;
    let request = CreateBookingRequest::new(user, &activity);

    book_ok(&server, &request).await;
    book_err(&server, &request, StatusCode::BAD_REQUEST, "DUPLICATE_BOOKING").await;
}

#[tokio::test]
async fn test_adhoc_member_needs_payment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = seed_participant(&server.pool, MembershipTier::Adhoc)
        .await
        .unwrap();
    let activity = create_activity(&server, 10, 0, true).await;

    let error = book_err(
        &server,
        &CreateBookingRequest::new(user, &activity),
        StatusCode::BAD_REQUEST,
        "PAYMENT_REQUIRED",
    )
    .await;
    assert!(error.error.contains("payment"));
}

#[tokio::test]
async fn test_weekly_token_limit_reports_usage() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = seed_participant(&server.pool, MembershipTier::Weekly1)
        .await
        .unwrap();
    let first = create_activity(&server, 10, 0, true).await;
    let second = create_activity(&server, 10, 0, true).await;

    book_ok(&server, &CreateBookingRequest::new(user, &first)).await;
    let error = book_err(
        &server,
        &CreateBookingRequest::new(user, &second),
        StatusCode::BAD_REQUEST,
        "TOKEN_LIMIT_REACHED",
    )
    .await;
    assert!(error.error.contains("1/1"));
}

#[tokio::test]
async fn test_capacity_gate_and_volunteer_uplift() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let activity = create_activity(&server, 2, 1, true).await;

    // Fill the two base seats
    for _ in 0..2 {
        let user = seed_participant(&server.pool, MembershipTier::Unlimited)
            .await
            .unwrap();
        book_ok(&server, &CreateBookingRequest::new(user, &activity)).await;
    }

    // Third participant bounces off capacity
    let third = seed_participant(&server.pool, MembershipTier::Unlimited)
        .await
        .unwrap();
    let error = book_err(
        &server,
        &CreateBookingRequest::new(third, &activity),
        StatusCode::BAD_REQUEST,
        "ACTIVITY_FULL",
    )
    .await;
    assert!(error.error.contains("2/2"));

    // A volunteer gets in through the volunteer slots and lifts capacity to 4
    let volunteer = seed_user(&server.pool, UserRole::Volunteer, MembershipTier::Adhoc, false)
        .await
        .unwrap();
    let confirmation = book_ok(&server, &CreateBookingRequest::new(volunteer, &activity)).await;
    assert_eq!(
        confirmation.details.tokens_remaining,
        serde_json::json!("N/A (Volunteer)")
    );

    // Now the third participant fits
    book_ok(&server, &CreateBookingRequest::new(third, &activity)).await;

    // A second volunteer exceeds the single volunteer slot
    let another = seed_user(&server.pool, UserRole::Volunteer, MembershipTier::Adhoc, false)
        .await
        .unwrap();
    book_err(
        &server,
        &CreateBookingRequest::new(another, &activity),
        StatusCode::BAD_REQUEST,
        "VOLUNTEER_SLOTS_FULL",
    )
    .await;
}

#[tokio::test]
async fn test_accessibility_mismatch() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = seed_user(
        &server.pool,
        UserRole::Participant,
        MembershipTier::Weekly2,
        true,
    )
    .await
    .unwrap();

    let inaccessible = create_activity(&server, 10, 0, false).await;
    book_err(
        &server,
        &CreateBookingRequest::new(user, &inaccessible),
        StatusCode::BAD_REQUEST,
        "ACCESSIBILITY_MISMATCH",
    )
    .await;

    let accessible = create_activity(&server, 10, 0, true).await;
    book_ok(&server, &CreateBookingRequest::new(user, &accessible)).await;
}

#[tokio::test]
async fn test_cancel_then_rebook() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = seed_participant(&server.pool, MembershipTier::Unlimited)
        .await
        .unwrap();
    let activity = create_activity(&server, 10, 0, true).await;
    let request = CreateBookingRequest::new(user, &activity);

    let confirmation = book_ok(&server, &request).await;

    let cancel_path = format!("/api/v1/bookings/{}/cancel", confirmation.booking_id);
    let cancel_body = CancelBookingRequest {
        user_id: user.to_string(),
    };
    let response = server.post(&cancel_path, &cancel_body).await.unwrap();
    let cancelled: CancelConfirmation = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(cancelled.success);

    // Cancellation frees the duplicate guard and the capacity slot
    book_ok(&server, &request).await;

    // Cancelling the old booking again is refused
    let response = server.post(&cancel_path, &cancel_body).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error_code, "ALREADY_CANCELLED");
}

#[tokio::test]
async fn test_cancel_foreign_booking_is_404() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let owner = seed_participant(&server.pool, MembershipTier::Unlimited)
        .await
        .unwrap();
    let other = seed_participant(&server.pool, MembershipTier::Unlimited)
        .await
        .unwrap();
    let activity = create_activity(&server, 10, 0, true).await;

    let confirmation = book_ok(&server, &CreateBookingRequest::new(owner, &activity)).await;

    let cancel_path = format!("/api/v1/bookings/{}/cancel", confirmation.booking_id);
    let response = server
        .post(
            &cancel_path,
            &CancelBookingRequest {
                user_id: other.to_string(),
            },
        )
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error_code, "BOOKING_NOT_FOUND");
}

// ============================================================================
// Token Balance Tests
// ============================================================================

#[tokio::test]
async fn test_token_balance_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = seed_participant(&server.pool, MembershipTier::Weekly2)
        .await
        .unwrap();
    let activity = create_activity(&server, 10, 0, true).await;

    let response = server
        .get(&format!("/api/v1/users/{user}/tokens"))
        .await
        .unwrap();
    let balance: TokenBalance = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(balance.membership_tier, "Weekly_2");
    assert_eq!(balance.tokens_total, serde_json::json!(2));
    assert_eq!(balance.tokens_used, serde_json::json!(0));

    book_ok(&server, &CreateBookingRequest::new(user, &activity)).await;

    let response = server
        .get(&format!("/api/v1/users/{user}/tokens"))
        .await
        .unwrap();
    let balance: TokenBalance = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(balance.tokens_used, serde_json::json!(1));
    assert_eq!(balance.tokens_remaining, serde_json::json!(1));
}

#[tokio::test]
async fn test_volunteer_token_balance_is_not_applicable() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let volunteer = seed_user(&server.pool, UserRole::Volunteer, MembershipTier::Adhoc, false)
        .await
        .unwrap();

    let response = server
        .get(&format!("/api/v1/users/{volunteer}/tokens"))
        .await
        .unwrap();
    let balance: TokenBalance = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(balance.role, "Volunteer");
    assert_eq!(balance.tokens_total, serde_json::json!("N/A"));
    assert_eq!(
        balance.tokens_remaining,
        serde_json::json!("N/A (Volunteer)")
    );
}

#[tokio::test]
async fn test_token_balance_unknown_user_is_404() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/users/999999999999/tokens").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Activity Tests
// ============================================================================

#[tokio::test]
async fn test_activity_list_reflects_live_counts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let activity = create_activity(&server, 10, 3, true).await;
    let user = seed_participant(&server.pool, MembershipTier::Unlimited)
        .await
        .unwrap();
    book_ok(&server, &CreateBookingRequest::new(user, &activity)).await;

    let response = server.get("/api/v1/activities").await.unwrap();
    let list: ActivityList = assert_json(response, StatusCode::OK).await.unwrap();
    let summary = list.activities.iter().find(|a| a.id == activity).unwrap();

    assert_eq!(summary.base_capacity, 10);
    assert_eq!(summary.current_capacity, 10);
    assert_eq!(summary.current_attendees, 1);
    assert_eq!(summary.available_slots, 9);
    assert!(summary.is_accessible);
}

#[tokio::test]
async fn test_activity_list_filters_for_wheelchair_users() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let wheelchair_user = seed_user(
        &server.pool,
        UserRole::Participant,
        MembershipTier::Weekly1,
        true,
    )
    .await
    .unwrap();
    let accessible = create_activity(&server, 10, 0, true).await;
    let inaccessible = create_activity(&server, 10, 0, false).await;

    let response = server
        .get(&format!("/api/v1/activities?user_id={wheelchair_user}"))
        .await
        .unwrap();
    let list: ActivityList = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(list.activities.iter().any(|a| a.id == accessible));
    assert!(!list.activities.iter().any(|a| a.id == inaccessible));
    assert!(list.activities.iter().all(|a| a.is_accessible));
}

#[tokio::test]
async fn test_activity_detail_includes_roster() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let activity = create_activity(&server, 10, 0, true).await;
    let user = seed_participant(&server.pool, MembershipTier::Unlimited)
        .await
        .unwrap();
    let confirmation = book_ok(&server, &CreateBookingRequest::new(user, &activity)).await;

    let response = server
        .get(&format!("/api/v1/activities/{activity}"))
        .await
        .unwrap();
    let detail: ActivityDetail = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(detail.id, activity);
    assert_eq!(detail.bookings.len(), 1);
    assert_eq!(detail.bookings[0].booking_id, confirmation.booking_id);
    assert_eq!(detail.bookings[0].user_role, "Participant");
}

#[tokio::test]
async fn test_activity_detail_unknown_is_404() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/activities/999999999999").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_create_activity_rejects_invalid_capacity() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let mut request = CreateActivityRequest::new(10, 0, true);
    request.base_capacity = -5;

    let response = server.post("/api/v1/activities", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// User Listing Tests
// ============================================================================

#[tokio::test]
async fn test_list_users_exposes_flags_and_tier() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = seed_user(
        &server.pool,
        UserRole::Participant,
        MembershipTier::Weekly2,
        true,
    )
    .await
    .unwrap();

    let response = server.get("/api/v1/users").await.unwrap();
    let list: UserList = assert_json(response, StatusCode::OK).await.unwrap();
    let entry = list
        .users
        .iter()
        .find(|u| u.id == user.to_string())
        .unwrap();

    assert_eq!(entry.membership_tier, "Weekly_2");
    assert_eq!(entry.medical_flags["wheelchair"], serde_json::json!(true));
}
