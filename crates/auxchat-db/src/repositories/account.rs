//! PostgreSQL implementation of AccountRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use auxchat_core::entities::{Account, NewAccount, ProfileUpdate, INITIAL_ENERGY};
use auxchat_core::error::DomainError;
use auxchat_core::traits::{AccountRepository, RepoResult};

use crate::models::AccountModel;

use super::error::{map_db_error, map_out_of_range, map_unique_violation};

/// PostgreSQL implementation of AccountRepository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    /// Create a new PgAccountRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Account>> {
        let result = sqlx::query_as::<_, AccountModel>(
            r"
            SELECT id, phone, username, avatar_url, energy, is_banned, bio,
                   last_activity, created_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Account::from))
    }

    #[instrument(skip(self))]
    async fn find_by_phone(&self, phone: &str) -> RepoResult<Option<Account>> {
        let result = sqlx::query_as::<_, AccountModel>(
            r"
            SELECT id, phone, username, avatar_url, energy, is_banned, bio,
                   last_activity, created_at
            FROM users
            WHERE phone = $1
            ",
        )
        .bind(phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Account::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, account: &NewAccount) -> RepoResult<Account> {
        let model = sqlx::query_as::<_, AccountModel>(
            r"
            INSERT INTO users (phone, username, avatar_url, energy, last_activity)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING id, phone, username, avatar_url, energy, is_banned, bio,
                      last_activity, created_at
            ",
        )
        .bind(&account.phone)
        .bind(&account.username)
        .bind(&account.avatar_url)
        .bind(INITIAL_ENERGY)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AccountAlreadyExists))?;

        Ok(Account::from(model))
    }

    #[instrument(skip(self))]
    async fn update_profile(&self, id: i64, update: &ProfileUpdate) -> RepoResult<Option<Account>> {
        let result = sqlx::query_as::<_, AccountModel>(
            r"
            UPDATE users
            SET username = COALESCE($2, username),
                avatar_url = COALESCE($3, avatar_url),
                bio = COALESCE($4, bio)
            WHERE id = $1
            RETURNING id, phone, username, avatar_url, energy, is_banned, bio,
                      last_activity, created_at
            ",
        )
        .bind(id)
        .bind(&update.username)
        .bind(&update.avatar_url)
        .bind(&update.bio)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Account::from))
    }

    #[instrument(skip(self))]
    async fn touch_activity(&self, id: i64) -> RepoResult<()> {
        sqlx::query("UPDATE users SET last_activity = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Account>> {
        let results = sqlx::query_as::<_, AccountModel>(
            r"
            SELECT id, phone, username, avatar_url, energy, is_banned, bio,
                   last_activity, created_at
            FROM users
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Account::from).collect())
    }

    #[instrument(skip(self))]
    async fn add_energy(&self, id: i64, amount: i32) -> RepoResult<Option<i32>> {
        sqlx::query_scalar::<_, i32>(
            r"
            UPDATE users
            SET energy = energy + $2
            WHERE id = $1
            RETURNING energy
            ",
        )
        .bind(id)
        .bind(amount)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            map_out_of_range(e, || {
                DomainError::ValidationError("Energy out of range".to_string())
            })
        })
    }

    #[instrument(skip(self))]
    async fn set_banned(&self, id: i64, banned: bool) -> RepoResult<bool> {
        let result = sqlx::query("UPDATE users SET is_banned = $2 WHERE id = $1")
            .bind(id)
            .bind(banned)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<bool> {
        // messages, reactions, private messages and photos cascade
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
