//! Token ledger
//!
//! Computes weekly booking usage and remaining allowance. The week is
//! Monday 00:00:00 UTC inclusive through the next Monday exclusive,
//! anchored on the injected clock. Usage counts bookings by their
//! creation time, never by the activity's scheduled time.

use care_core::{Snowflake, TokenLimit, User, WeekWindow};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// A user's weekly token position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenBalance {
    /// Volunteers are outside the token system entirely
    Volunteer,
    /// No weekly cap; usage still reported
    Unlimited { used: u32 },
    /// Capped allowance with remaining floored at zero
    Limited { limit: u32, used: u32, remaining: u32 },
}

/// Token ledger service
pub struct TokenLedger<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TokenLedger<'a> {
    /// Create a new TokenLedger
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The week window containing "now"
    pub fn current_window(&self) -> WeekWindow {
        WeekWindow::containing(self.ctx.clock().now())
    }

    /// Count of the user's Confirmed bookings created inside the window
    pub async fn weekly_usage(&self, user_id: Snowflake, window: WeekWindow) -> ServiceResult<u32> {
        let count = self
            .ctx
            .booking_repo()
            .count_confirmed_in_window(user_id, window)
            .await?;
        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }

    /// The user's balance for the current week
    pub async fn balance(&self, user: &User) -> ServiceResult<TokenBalance> {
        if user.is_volunteer() {
            return Ok(TokenBalance::Volunteer);
        }

        let used = self.weekly_usage(user.id, self.current_window()).await?;
        Ok(match user.weekly_token_limit() {
            TokenLimit::Unlimited => TokenBalance::Unlimited { used },
            TokenLimit::Limited(limit) => TokenBalance::Limited {
                limit,
                used,
                remaining: limit.saturating_sub(used),
            },
        })
    }
}
