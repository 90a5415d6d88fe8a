//! Account service
//!
//! Profile reads and updates.

use auxchat_core::ProfileUpdate;
use tracing::{info, instrument};

use crate::dto::{CurrentUserResponse, PublicUserResponse, UpdateProfileRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Account service
pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    /// Create a new AccountService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Full profile of the caller; counts as activity
    #[instrument(skip(self))]
    pub async fn get_current(&self, user_id: i64) -> ServiceResult<CurrentUserResponse> {
        self.ctx.account_repo().touch_activity(user_id).await?;

        let account = self
            .ctx
            .account_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id))?;

        Ok(account.into())
    }

    /// Public profile of any account
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: i64) -> ServiceResult<PublicUserResponse> {
        let account = self
            .ctx
            .account_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id))?;

        Ok(PublicUserResponse::from(&account))
    }

    /// Update the caller's profile
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: i64,
        request: UpdateProfileRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        let username = match request.username {
            Some(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(ServiceError::validation("Username required"));
                }
                Some(name.to_string())
            }
            None => None,
        };

        let update = ProfileUpdate {
            username,
            avatar_url: request.avatar_url.map(|url| url.trim().to_string()),
            bio: request.bio.map(|bio| bio.trim().to_string()),
        };

        let account = if update.is_empty() {
            self.ctx.account_repo().find_by_id(user_id).await?
        } else {
            self.ctx.account_repo().update_profile(user_id, &update).await?
        }
        .ok_or_else(|| ServiceError::not_found("User", user_id))?;

        info!(user_id, "Profile updated");

        Ok(account.into())
    }
}
