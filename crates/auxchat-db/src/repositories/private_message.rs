//! PostgreSQL implementation of PrivateMessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use auxchat_core::entities::{ConversationMessage, ConversationSummary, PrivateMessage};
use auxchat_core::error::DomainError;
use auxchat_core::traits::{PrivateMessageRepository, RepoResult};

use crate::models::{ConversationMessageModel, ConversationSummaryModel, PrivateMessageModel};

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of PrivateMessageRepository
#[derive(Clone)]
pub struct PgPrivateMessageRepository {
    pool: PgPool,
}

impl PgPrivateMessageRepository {
    /// Create a new PgPrivateMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PrivateMessageRepository for PgPrivateMessageRepository {
    #[instrument(skip(self, text))]
    async fn create(
        &self,
        sender_id: i64,
        receiver_id: i64,
        text: &str,
    ) -> RepoResult<PrivateMessage> {
        let model = sqlx::query_as::<_, PrivateMessageModel>(
            r"
            INSERT INTO private_messages (sender_id, receiver_id, text)
            VALUES ($1, $2, $3)
            RETURNING id, sender_id, receiver_id, text, is_read, created_at
            ",
        )
        .bind(sender_id)
        .bind(receiver_id)
        .bind(text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::AccountNotFound(receiver_id)))?;

        Ok(PrivateMessage::from(model))
    }

    #[instrument(skip(self))]
    async fn find_conversation(
        &self,
        user_id: i64,
        other_user_id: i64,
        limit: i64,
    ) -> RepoResult<Vec<ConversationMessage>> {
        // Newest `limit` messages, returned oldest first
        let results = sqlx::query_as::<_, ConversationMessageModel>(
            r"
            SELECT * FROM (
                SELECT pm.id, pm.sender_id, pm.receiver_id, pm.text, pm.is_read, pm.created_at,
                       u.username AS sender_username, u.avatar_url AS sender_avatar_url
                FROM private_messages pm
                JOIN users u ON u.id = pm.sender_id
                WHERE (pm.sender_id = $1 AND pm.receiver_id = $2)
                   OR (pm.sender_id = $2 AND pm.receiver_id = $1)
                ORDER BY pm.created_at DESC, pm.id DESC
                LIMIT $3
            ) recent
            ORDER BY created_at ASC, id ASC
            ",
        )
        .bind(user_id)
        .bind(other_user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ConversationMessage::from).collect())
    }

    #[instrument(skip(self))]
    async fn mark_read(&self, receiver_id: i64, sender_id: i64) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE private_messages
            SET is_read = TRUE
            WHERE receiver_id = $1 AND sender_id = $2 AND is_read = FALSE
            ",
        )
        .bind(receiver_id)
        .bind(sender_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn list_conversations(&self, user_id: i64) -> RepoResult<Vec<ConversationSummary>> {
        let results = sqlx::query_as::<_, ConversationSummaryModel>(
            r"
            WITH latest AS (
                SELECT DISTINCT ON (counterpart_id)
                       counterpart_id, text, created_at
                FROM (
                    SELECT CASE WHEN sender_id = $1 THEN receiver_id ELSE sender_id END
                               AS counterpart_id,
                           id, text, created_at
                    FROM private_messages
                    WHERE sender_id = $1 OR receiver_id = $1
                ) mine
                ORDER BY counterpart_id, created_at DESC, id DESC
            ),
            unread AS (
                SELECT sender_id AS counterpart_id, COUNT(*) AS unread_count
                FROM private_messages
                WHERE receiver_id = $1 AND is_read = FALSE
                GROUP BY sender_id
            )
            SELECT l.counterpart_id, u.username, u.avatar_url, u.last_activity,
                   l.text AS last_message, l.created_at AS last_message_at,
                   COALESCE(un.unread_count, 0) AS unread_count
            FROM latest l
            JOIN users u ON u.id = l.counterpart_id
            LEFT JOIN unread un ON un.counterpart_id = l.counterpart_id
            ORDER BY l.created_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ConversationSummary::from).collect())
    }
}
