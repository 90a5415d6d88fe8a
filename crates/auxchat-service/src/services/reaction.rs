//! Reaction service
//!
//! Toggles emoji reactions on feed messages.

use auxchat_core::{DomainError, MAX_EMOJI_LENGTH};
use tracing::{info, instrument};

use crate::dto::{ReactionToggleResponse, ToggleReactionRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add the reaction if absent, remove it if present
    #[instrument(skip(self, request))]
    pub async fn toggle(
        &self,
        user_id: i64,
        message_id: i64,
        request: ToggleReactionRequest,
    ) -> ServiceResult<ReactionToggleResponse> {
        let emoji = request.emoji.trim();
        if emoji.is_empty() {
            return Err(ServiceError::validation("Emoji required"));
        }
        if emoji.chars().count() > MAX_EMOJI_LENGTH {
            return Err(ServiceError::validation(format!(
                "Emoji must be at most {MAX_EMOJI_LENGTH} characters"
            )));
        }

        if !self.ctx.message_repo().exists(message_id).await? {
            return Err(DomainError::MessageNotFound(message_id).into());
        }

        let toggled = self
            .ctx
            .reaction_repo()
            .toggle(message_id, user_id, emoji)
            .await?;

        info!(message_id, user_id, action = toggled.as_str(), "Reaction toggled");

        Ok(ReactionToggleResponse {
            success: true,
            action: toggled.as_str().to_string(),
        })
    }
}
