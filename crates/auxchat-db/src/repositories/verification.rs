//! PostgreSQL implementation of VerificationCodeRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use auxchat_core::entities::VerificationCode;
use auxchat_core::traits::{RepoResult, VerificationCodeRepository};

use crate::models::VerificationCodeModel;

use super::error::map_db_error;

/// PostgreSQL implementation of VerificationCodeRepository
#[derive(Clone)]
pub struct PgVerificationCodeRepository {
    pool: PgPool,
}

impl PgVerificationCodeRepository {
    /// Create a new PgVerificationCodeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VerificationCodeRepository for PgVerificationCodeRepository {
    #[instrument(skip(self, code))]
    async fn replace(
        &self,
        phone: &str,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<VerificationCode> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM sms_codes WHERE phone = $1")
            .bind(phone)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let model = sqlx::query_as::<_, VerificationCodeModel>(
            r"
            INSERT INTO sms_codes (phone, code, expires_at, verified)
            VALUES ($1, $2, $3, FALSE)
            RETURNING id, phone, code, expires_at, verified, created_at
            ",
        )
        .bind(phone)
        .bind(code)
        .bind(expires_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(VerificationCode::from(model))
    }

    #[instrument(skip(self))]
    async fn find_latest(&self, phone: &str) -> RepoResult<Option<VerificationCode>> {
        let result = sqlx::query_as::<_, VerificationCodeModel>(
            r"
            SELECT id, phone, code, expires_at, verified, created_at
            FROM sms_codes
            WHERE phone = $1
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            ",
        )
        .bind(phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(VerificationCode::from))
    }

    #[instrument(skip(self))]
    async fn mark_verified(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE sms_codes
            SET verified = TRUE
            WHERE id = $1 AND verified = FALSE
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }
}
