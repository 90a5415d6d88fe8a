//! Message database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for messages table
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: i64,
    pub user_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A message joined with its author and the author's first gallery photo
#[derive(Debug, Clone, FromRow)]
pub struct FeedRowModel {
    pub id: i64,
    pub user_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub username: String,
    pub avatar_url: Option<String>,
    pub first_photo: Option<String>,
}
