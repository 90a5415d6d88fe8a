//! Account database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct AccountModel {
    pub id: i64,
    pub phone: String,
    pub username: String,
    pub avatar_url: Option<String>,
    pub energy: i32,
    pub is_banned: bool,
    pub bio: Option<String>,
    pub last_activity: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
