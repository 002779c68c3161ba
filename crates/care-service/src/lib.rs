//! # care-service
//!
//! Application layer containing the booking validator/executor, token
//! ledger, capacity calculator, query facade, and DTOs.

pub mod dto;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

pub use dto::{
    ActivityDetailResponse, ActivityListResponse, ActivitySummaryResponse,
    BookingConfirmationResponse, BookingDetails, CancelBookingRequest, CancelBookingResponse,
    CreateActivityRequest, CreateActivityResponse, CreateBookingRequest, HealthResponse,
    ReadinessResponse, RosterEntryResponse, TokenBalanceResponse, TokenFigure, UserListResponse,
    UserSummaryResponse,
};
pub use services::{
    ActivityLoad, ActivityService, BookingGate, BookingService, CapacityService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, TokenBalance, TokenLedger, UserService,
};
