//! Message service
//!
//! The public feed and the energy-gated post.

use auxchat_core::{Message, MESSAGE_COST};
use tracing::{info, instrument, warn};

use crate::dto::{
    CreateMessageRequest, FeedMessageResponse, MessageFeedResponse, MessageListQuery,
    PostMessageResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a message, paying [`MESSAGE_COST`] energy
    ///
    /// The debit and the insert happen together or not at all.
    #[instrument(skip(self, request))]
    pub async fn post_message(
        &self,
        author_id: i64,
        request: CreateMessageRequest,
    ) -> ServiceResult<PostMessageResponse> {
        let text = Message::validate_text(&request.text)?;

        let posted = self
            .ctx
            .message_repo()
            .post_with_energy(author_id, text, MESSAGE_COST)
            .await
            .inspect_err(|e| warn!(user_id = author_id, reason = %e, "Message rejected"))?;

        info!(
            message_id = posted.message.id,
            user_id = author_id,
            energy = posted.remaining_energy,
            "Message posted"
        );

        Ok(PostMessageResponse {
            success: true,
            message_id: posted.message.id,
            new_energy: posted.remaining_energy,
        })
    }

    /// A page of the feed, oldest first
    #[instrument(skip(self))]
    pub async fn list_messages(&self, query: MessageListQuery) -> ServiceResult<MessageFeedResponse> {
        let entries = self
            .ctx
            .message_repo()
            .list(query.limit(), query.offset())
            .await?;

        let ids: Vec<i64> = entries.iter().map(|entry| entry.message.id).collect();
        let counts = if ids.is_empty() {
            Vec::new()
        } else {
            self.ctx.reaction_repo().counts_for_messages(&ids).await?
        };

        let messages = entries
            .into_iter()
            .map(|entry| FeedMessageResponse::from_entry(entry, &counts))
            .collect();

        Ok(MessageFeedResponse { messages })
    }
}
