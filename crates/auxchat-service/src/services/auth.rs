//! Authentication service
//!
//! Registration for verified phones and session refresh.

use auxchat_core::{DomainError, NewAccount};
use tracing::{info, instrument};

use crate::dto::{AuthResponse, RefreshTokenRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an account for the phone proven by `phone_token`
    #[instrument(skip(self, request))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        let phone = self
            .ctx
            .jwt_service()
            .validate_phone_token(&request.phone_token)?;

        let username = request.username.trim();
        if username.is_empty() {
            return Err(ServiceError::validation("Username required"));
        }

        if self.ctx.account_repo().find_by_phone(&phone).await?.is_some() {
            return Err(DomainError::AccountAlreadyExists.into());
        }

        let avatar_url = request
            .avatar_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        let account = self
            .ctx
            .account_repo()
            .create(&NewAccount {
                phone,
                username: username.to_string(),
                avatar_url,
            })
            .await?;

        info!(user_id = account.id, username = %account.username, "Account registered");

        let tokens = self.ctx.jwt_service().generate_token_pair(account.id)?;
        Ok(AuthResponse::new(tokens, account.into()))
    }

    /// Exchange a refresh token for a new token pair
    #[instrument(skip(self, request))]
    pub async fn refresh_token(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let (user_id, tokens) = self
            .ctx
            .jwt_service()
            .refresh_tokens(&request.refresh_token)?;

        let account = self
            .ctx
            .account_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id))?;

        Ok(AuthResponse::new(tokens, account.into()))
    }
}
