//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in care-core.
//! Each repository handles database operations for a specific domain entity.

mod activity;
mod booking;
mod error;
mod user;

pub use activity::PgActivityRepository;
pub use booking::PgBookingRepository;
pub use user::PgUserRepository;
