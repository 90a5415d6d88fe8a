//! Private message database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for private_messages table
#[derive(Debug, Clone, FromRow)]
pub struct PrivateMessageModel {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub text: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Private message joined with the sender's profile
#[derive(Debug, Clone, FromRow)]
pub struct ConversationMessageModel {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub text: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub sender_username: String,
    pub sender_avatar_url: Option<String>,
}

/// Latest message with one counterpart
#[derive(Debug, Clone, FromRow)]
pub struct ConversationSummaryModel {
    pub counterpart_id: i64,
    pub username: String,
    pub avatar_url: Option<String>,
    pub last_activity: Option<DateTime<Utc>>,
    pub last_message: String,
    pub last_message_at: DateTime<Utc>,
    pub unread_count: i64,
}
