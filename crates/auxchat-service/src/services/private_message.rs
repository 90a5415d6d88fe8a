//! Private message service
//!
//! One-to-one conversations between accounts.

use auxchat_core::{DomainError, Message};
use tracing::{debug, info, instrument};

use crate::dto::{
    ConversationListResponse, ConversationResponse, SendPrivateMessageRequest,
    SentPrivateMessageResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Most messages returned for one conversation
pub const CONVERSATION_LIMIT: i64 = 100;

/// Private message service
pub struct PrivateMessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PrivateMessageService<'a> {
    /// Create a new PrivateMessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a message to another account
    #[instrument(skip(self, request))]
    pub async fn send(
        &self,
        sender_id: i64,
        receiver_id: i64,
        request: SendPrivateMessageRequest,
    ) -> ServiceResult<SentPrivateMessageResponse> {
        let text = Message::validate_text(&request.text)?;

        let sender = self
            .ctx
            .account_repo()
            .find_by_id(sender_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", sender_id))?;
        if sender.is_banned {
            return Err(DomainError::AccountBanned.into());
        }

        if self.ctx.account_repo().find_by_id(receiver_id).await?.is_none() {
            return Err(ServiceError::not_found("User", receiver_id));
        }

        let message = self
            .ctx
            .private_message_repo()
            .create(sender_id, receiver_id, text)
            .await?;
        self.ctx.account_repo().touch_activity(sender_id).await?;

        info!(message_id = message.id, sender_id, receiver_id, "Private message sent");

        Ok(SentPrivateMessageResponse {
            success: true,
            message_id: message.id,
        })
    }

    /// Latest messages with `other_id`, oldest first; marks theirs as read
    #[instrument(skip(self))]
    pub async fn conversation(
        &self,
        user_id: i64,
        other_id: i64,
    ) -> ServiceResult<ConversationResponse> {
        let messages = self
            .ctx
            .private_message_repo()
            .find_conversation(user_id, other_id, CONVERSATION_LIMIT)
            .await?;

        let marked = self
            .ctx
            .private_message_repo()
            .mark_read(user_id, other_id)
            .await?;
        debug!(user_id, other_id, marked, "Conversation marked read");

        Ok(ConversationResponse {
            messages: messages.into_iter().map(Into::into).collect(),
        })
    }

    /// One entry per counterpart, most recent conversation first
    #[instrument(skip(self))]
    pub async fn list_conversations(&self, user_id: i64) -> ServiceResult<ConversationListResponse> {
        let summaries = self
            .ctx
            .private_message_repo()
            .list_conversations(user_id)
            .await?;

        Ok(ConversationListResponse {
            conversations: summaries.into_iter().map(Into::into).collect(),
        })
    }
}
