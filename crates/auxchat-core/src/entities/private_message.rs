//! Private message entities - direct messages between two accounts

use chrono::{DateTime, Utc};

/// Private message entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateMessage {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub text: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl PrivateMessage {
    /// Check if `user_id` takes part in this message
    #[inline]
    pub fn involves(&self, user_id: i64) -> bool {
        self.sender_id == user_id || self.receiver_id == user_id
    }
}

/// A private message with sender details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationMessage {
    pub message: PrivateMessage,
    pub sender_username: String,
    pub sender_avatar_url: Option<String>,
}

/// One row of the conversation list: the latest exchange with a counterpart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationSummary {
    pub counterpart_id: i64,
    pub username: String,
    pub avatar_url: Option<String>,
    pub last_activity: Option<DateTime<Utc>>,
    pub last_message: String,
    pub last_message_at: DateTime<Utc>,
    pub unread_count: i64,
}
