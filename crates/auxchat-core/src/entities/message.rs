//! Message entity - a post in the shared chat feed

use chrono::{DateTime, Utc};

use crate::error::DomainError;

/// Energy debited per posted message
pub const MESSAGE_COST: i32 = 10;

/// Maximum message length in characters
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: i64,
    pub user_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Normalize and validate message text, returning the trimmed content
    pub fn validate_text(text: &str) -> Result<&str, DomainError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::ValidationError("Message text required".to_string()));
        }
        if trimmed.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(DomainError::ContentTooLong {
                max: MAX_MESSAGE_LENGTH,
            });
        }
        Ok(trimmed)
    }
}

/// Result of an energy-gated post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedMessage {
    pub message: Message,
    pub remaining_energy: i32,
}

/// Author details joined onto feed entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageAuthor {
    pub id: i64,
    pub username: String,
    pub avatar_url: Option<String>,
    /// First gallery photo, if the author has any
    pub first_photo: Option<String>,
}

/// A feed message with its author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub message: Message,
    pub author: MessageAuthor,
}
