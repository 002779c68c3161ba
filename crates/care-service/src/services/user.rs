//! User service - token balances and user listing

use care_core::{DomainError, Snowflake};
use tracing::instrument;

use crate::dto::{token_balance_response, user_summary, TokenBalanceResponse, UserListResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::ledger::TokenLedger;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a user's weekly token balance
    #[instrument(skip(self))]
    pub async fn token_balance(&self, user_id: Snowflake) -> ServiceResult<TokenBalanceResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let balance = TokenLedger::new(self.ctx).balance(&user).await?;
        Ok(token_balance_response(&user, balance))
    }

    /// List all users
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> ServiceResult<UserListResponse> {
        let users = self.ctx.user_repo().list().await?;
        Ok(UserListResponse {
            users: users.iter().map(user_summary).collect(),
        })
    }
}
