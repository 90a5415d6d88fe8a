//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use auxchat_core::entities::{ReactionCount, ReactionToggle};
use auxchat_core::error::DomainError;
use auxchat_core::traits::{ReactionRepository, RepoResult};

use crate::models::ReactionCountModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn toggle(
        &self,
        message_id: i64,
        user_id: i64,
        emoji: &str,
    ) -> RepoResult<ReactionToggle> {
        let removed = sqlx::query(
            r"
            DELETE FROM message_reactions
            WHERE message_id = $1 AND user_id = $2 AND emoji = $3
            ",
        )
        .bind(message_id)
        .bind(user_id)
        .bind(emoji)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if removed.rows_affected() > 0 {
            return Ok(ReactionToggle::Removed);
        }

        sqlx::query(
            r"
            INSERT INTO message_reactions (message_id, user_id, emoji)
            VALUES ($1, $2, $3)
            ON CONFLICT (message_id, user_id, emoji) DO NOTHING
            ",
        )
        .bind(message_id)
        .bind(user_id)
        .bind(emoji)
        .execute(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::MessageNotFound(message_id)))?;

        Ok(ReactionToggle::Added)
    }

    #[instrument(skip(self))]
    async fn counts_for_messages(&self, message_ids: &[i64]) -> RepoResult<Vec<ReactionCount>> {
        if message_ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, ReactionCountModel>(
            r"
            SELECT message_id, emoji, COUNT(*) AS count
            FROM message_reactions
            WHERE message_id = ANY($1)
            GROUP BY message_id, emoji
            ORDER BY message_id, MIN(created_at)
            ",
        )
        .bind(message_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReactionCount::from).collect())
    }
}
