//! Data transfer objects for the API boundary

mod mappers;
mod requests;
mod responses;

pub use mappers::{activity_summary, roster_entry, token_balance_response, user_summary};
pub use requests::{CancelBookingRequest, CreateActivityRequest, CreateBookingRequest};
pub use responses::{
    ActivityDetailResponse, ActivityListResponse, ActivitySummaryResponse,
    BookingConfirmationResponse, BookingDetails, CancelBookingResponse, CreateActivityResponse,
    HealthResponse, ReadinessResponse, RosterEntryResponse, TokenBalanceResponse, TokenFigure,
    UserListResponse, UserSummaryResponse,
};
