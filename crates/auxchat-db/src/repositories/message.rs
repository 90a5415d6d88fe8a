//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use auxchat_core::entities::{FeedEntry, Message, PostedMessage};
use auxchat_core::error::DomainError;
use auxchat_core::traits::{MessageRepository, RepoResult};

use crate::models::{FeedRowModel, MessageModel};

use super::error::map_db_error;

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self, text))]
    async fn post_with_energy(
        &self,
        user_id: i64,
        text: &str,
        cost: i32,
    ) -> RepoResult<PostedMessage> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Conditional decrement: the row is only touched when the balance covers the cost
        let remaining = sqlx::query_scalar::<_, i32>(
            r"
            UPDATE users
            SET energy = energy - $2, last_activity = NOW()
            WHERE id = $1 AND energy >= $2 AND is_banned = FALSE
            RETURNING energy
            ",
        )
        .bind(user_id)
        .bind(cost)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(remaining_energy) = remaining else {
            let banned = sqlx::query_scalar::<_, bool>("SELECT is_banned FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_db_error)?;

            return Err(match banned {
                None => DomainError::AccountNotFound(user_id),
                Some(true) => DomainError::AccountBanned,
                Some(false) => DomainError::NotEnoughEnergy,
            });
        };

        let model = sqlx::query_as::<_, MessageModel>(
            r"
            INSERT INTO messages (user_id, text)
            VALUES ($1, $2)
            RETURNING id, user_id, text, created_at
            ",
        )
        .bind(user_id)
        .bind(text)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(PostedMessage {
            message: Message::from(model),
            remaining_energy,
        })
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: i64) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM messages WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<FeedEntry>> {
        let results = sqlx::query_as::<_, FeedRowModel>(
            r"
            SELECT m.id, m.user_id, m.text, m.created_at,
                   u.username, u.avatar_url,
                   (SELECT p.photo_url
                    FROM user_photos p
                    WHERE p.user_id = u.id
                    ORDER BY p.display_order ASC, p.created_at DESC
                    LIMIT 1) AS first_photo
            FROM messages m
            JOIN users u ON u.id = m.user_id
            ORDER BY m.created_at ASC, m.id ASC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(FeedEntry::from).collect())
    }
}
