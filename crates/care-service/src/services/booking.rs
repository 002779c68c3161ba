//! Booking validator/executor
//!
//! Runs the fixed-order validation gate and, when every check passes,
//! commits one Confirmed booking. Check order is part of the contract:
//! existence, duplicate guard, tokens, capacity, accessibility. Each
//! failure short-circuits the rest.

use care_core::{Booking, BookingStatus, DomainError, MembershipTier, Snowflake, TokenLimit};
use tracing::{info, instrument};

use crate::dto::{
    BookingConfirmationResponse, BookingDetails, CancelBookingResponse, TokenFigure,
};

use super::capacity::CapacityService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::ledger::TokenLedger;

/// Booking service
pub struct BookingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BookingService<'a> {
    /// Create a new BookingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Attempt to book an activity for a user.
    ///
    /// The whole attempt runs under the per-activity gate so the counts
    /// read by the checks are still true when the insert commits.
    #[instrument(skip(self))]
    pub async fn attempt_booking(
        &self,
        user_id: Snowflake,
        activity_id: Snowflake,
    ) -> ServiceResult<BookingConfirmationResponse> {
        let _guard = self.ctx.gate().lock(activity_id).await;

        // Check 1: both sides of the booking must exist
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let activity = self
            .ctx
            .activity_repo()
            .find_by_id(activity_id)
            .await?
            .ok_or(DomainError::ActivityNotFound(activity_id))?;

        // Check 2: at most one Confirmed booking per (user, activity)
        if self
            .ctx
            .booking_repo()
            .find_confirmed(user_id, activity_id)
            .await?
            .is_some()
        {
            return Err(DomainError::DuplicateBooking.into());
        }

        // Check 3: weekly tokens. Volunteers are outside the token system.
        let ledger = TokenLedger::new(self.ctx);
        if !user.is_volunteer() {
            // Ad-hoc members are redirected to payment before any counting
            if user.membership_tier == MembershipTier::Adhoc {
                return Err(DomainError::PaymentRequired.into());
            }

            if let TokenLimit::Limited(limit) = user.weekly_token_limit() {
                let used = ledger.weekly_usage(user_id, ledger.current_window()).await?;
                if used >= limit {
                    return Err(DomainError::TokenLimitReached { used, limit }.into());
                }
            }
        }

        // Check 4: capacity. Volunteers consume volunteer slots and raise
        // capacity for everyone else; they never count as attendees.
        if user.is_volunteer() {
            let filled = self
                .ctx
                .booking_repo()
                .count_confirmed_volunteers(activity_id)
                .await?;
            if filled >= activity.volunteer_slots {
                return Err(DomainError::VolunteerSlotsFull {
                    filled,
                    slots: activity.volunteer_slots,
                }
                .into());
            }
        } else {
            let load = CapacityService::new(self.ctx).load(&activity).await?;
            if load.attendees >= load.capacity {
                return Err(DomainError::ActivityFull {
                    attendees: load.attendees,
                    capacity: load.capacity,
                }
                .into());
            }
        }

        // Check 5: accessibility
        if user.requires_wheelchair() && !activity.is_accessible() {
            return Err(DomainError::AccessibilityMismatch.into());
        }

        // All checks passed: commit the booking
        let now = self.ctx.clock().now();
        let booking = Booking::confirmed(self.ctx.generate_id(), user_id, activity_id, now);
        self.ctx.booking_repo().create(&booking).await?;

        info!(
            booking_id = %booking.id,
            user_id = %user_id,
            activity_id = %activity_id,
            "Booking confirmed"
        );

        // Recompute the balance after the insert for the response
        let tokens_remaining = if user.is_volunteer() {
            TokenFigure::volunteer()
        } else {
            match user.weekly_token_limit() {
                TokenLimit::Unlimited => TokenFigure::unlimited(),
                TokenLimit::Limited(limit) => {
                    let used = ledger.weekly_usage(user_id, ledger.current_window()).await?;
                    TokenFigure::Count(limit.saturating_sub(used))
                }
            }
        };

        Ok(BookingConfirmationResponse {
            success: true,
            booking_id: booking.id,
            message: "Booking confirmed successfully".to_string(),
            details: BookingDetails {
                user_name: user.name,
                activity_title: activity.title,
                activity_start: activity.start_time,
                tokens_remaining,
                booking_status: booking.status.as_str(),
            },
        })
    }

    /// Cancel a booking owned by the given user.
    ///
    /// Ownership is exact user_id equality; linked accounts carry no
    /// cancellation rights. Cancelling frees the capacity/token slot
    /// implicitly because every count reads Confirmed rows only.
    #[instrument(skip(self))]
    pub async fn cancel_booking(
        &self,
        booking_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<CancelBookingResponse> {
        let mut booking = self
            .ctx
            .booking_repo()
            .find_by_id(booking_id)
            .await?
            .filter(|b| b.user_id == user_id)
            .ok_or(DomainError::BookingNotFound)?;

        if booking.status == BookingStatus::Cancelled {
            return Err(DomainError::AlreadyCancelled.into());
        }

        booking.cancel(self.ctx.clock().now());
        self.ctx.booking_repo().update(&booking).await?;

        info!(booking_id = %booking_id, user_id = %user_id, "Booking cancelled");

        Ok(CancelBookingResponse {
            success: true,
            message: "Booking cancelled successfully".to_string(),
            booking_id,
        })
    }
}
