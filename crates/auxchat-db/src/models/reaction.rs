//! Reaction database models

use sqlx::FromRow;

/// Per-emoji reaction count of a message
#[derive(Debug, Clone, FromRow)]
pub struct ReactionCountModel {
    pub message_id: i64,
    pub emoji: String,
    pub count: i64,
}
