//! PostgreSQL implementation of PhotoRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use auxchat_core::entities::Photo;
use auxchat_core::error::DomainError;
use auxchat_core::traits::{PhotoRepository, RepoResult};

use crate::models::PhotoModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PhotoRepository
#[derive(Clone)]
pub struct PgPhotoRepository {
    pool: PgPool,
}

impl PgPhotoRepository {
    /// Create a new PgPhotoRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PhotoRepository for PgPhotoRepository {
    #[instrument(skip(self))]
    async fn list_for_account(&self, user_id: i64, limit: i64) -> RepoResult<Vec<Photo>> {
        let results = sqlx::query_as::<_, PhotoModel>(
            r"
            SELECT id, user_id, photo_url, display_order, created_at
            FROM user_photos
            WHERE user_id = $1
            ORDER BY display_order ASC, created_at DESC
            LIMIT $2
            ",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Photo::from).collect())
    }

    #[instrument(skip(self))]
    async fn create_capped(
        &self,
        user_id: i64,
        photo_url: &str,
        max: i64,
    ) -> RepoResult<Option<Photo>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Serialize gallery inserts per account on the owner row
        let owner = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE id = $1 FOR UPDATE")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if owner.is_none() {
            return Err(DomainError::AccountNotFound(user_id));
        }

        let inserted = sqlx::query_as::<_, PhotoModel>(
            r"
            INSERT INTO user_photos (user_id, photo_url, display_order)
            SELECT $1, $2, COUNT(*)::INTEGER
            FROM user_photos
            WHERE user_id = $1
            HAVING COUNT(*) < $3
            RETURNING id, user_id, photo_url, display_order, created_at
            ",
        )
        .bind(user_id)
        .bind(photo_url)
        .bind(max)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(inserted.map(Photo::from))
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: i64, photo_id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM user_photos WHERE id = $1 AND user_id = $2")
            .bind(photo_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
