//! Entity -> response DTO mappers

use care_core::{Activity, Booking, User};

use crate::services::{ActivityLoad, TokenBalance};

use super::responses::{
    ActivitySummaryResponse, RosterEntryResponse, TokenBalanceResponse, TokenFigure,
    UserSummaryResponse,
};

/// Build an activity summary from the entity and its live counts
pub fn activity_summary(activity: &Activity, load: ActivityLoad) -> ActivitySummaryResponse {
    ActivitySummaryResponse {
        id: activity.id,
        title: activity.title.clone(),
        description: activity.description.clone(),
        start_time: activity.start_time,
        end_time: activity.end_time,
        location: activity.location.clone(),
        base_capacity: activity.base_capacity,
        current_capacity: load.capacity,
        current_attendees: load.attendees,
        available_slots: load.available_slots(),
        volunteer_slots: activity.volunteer_slots,
        requirements: activity.requirements,
        is_accessible: activity.is_accessible(),
    }
}

/// Build a roster entry from a Confirmed booking and its owner
pub fn roster_entry(booking: &Booking, user: &User) -> RosterEntryResponse {
    RosterEntryResponse {
        booking_id: booking.id,
        user_name: user.name.clone(),
        user_role: user.role,
        booked_at: booking.created_at,
    }
}

/// Build a user listing entry
pub fn user_summary(user: &User) -> UserSummaryResponse {
    UserSummaryResponse {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role,
        membership_tier: user.membership_tier,
        medical_flags: user.medical_flags,
    }
}

/// Build the token balance response for a user
pub fn token_balance_response(user: &User, balance: TokenBalance) -> TokenBalanceResponse {
    let (tokens_total, tokens_used, tokens_remaining) = match balance {
        TokenBalance::Volunteer => (
            TokenFigure::not_applicable(),
            TokenFigure::not_applicable(),
            TokenFigure::volunteer(),
        ),
        TokenBalance::Unlimited { used } => (
            TokenFigure::unlimited(),
            TokenFigure::Count(used),
            TokenFigure::unlimited(),
        ),
        TokenBalance::Limited {
            limit,
            used,
            remaining,
        } => (
            TokenFigure::Count(limit),
            TokenFigure::Count(used),
            TokenFigure::Count(remaining),
        ),
    };

    TokenBalanceResponse {
        user_id: user.id,
        user_name: user.name.clone(),
        membership_tier: user.membership_tier,
        tokens_total,
        tokens_used,
        tokens_remaining,
        role: user.role,
    }
}
