//! Reaction entity - an emoji tag a user puts on a message

use chrono::{DateTime, Utc};

/// Maximum emoji length in characters
pub const MAX_EMOJI_LENGTH: usize = 32;

/// Reaction entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub message_id: i64,
    pub user_id: i64,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregated reaction count for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionCount {
    pub message_id: i64,
    pub emoji: String,
    pub count: i64,
}

/// Outcome of toggling a reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionToggle {
    Added,
    Removed,
}

impl ReactionToggle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
        }
    }
}
