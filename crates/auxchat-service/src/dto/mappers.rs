//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use auxchat_core::{
    resolve_avatar, Account, ConversationMessage, ConversationSummary, FeedEntry, Photo,
    Presence, ReactionCount,
};
use chrono::Utc;

use super::responses::{
    AdminUserResponse, AuthorResponse, ConversationMessageResponse, ConversationSummaryResponse,
    CurrentUserResponse, FeedMessageResponse, PhotoResponse, PublicUserResponse,
    ReactionCountResponse, SenderResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&Account> for CurrentUserResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            phone: account.phone.clone(),
            username: account.username.clone(),
            avatar: account.display_avatar(),
            energy: account.energy,
            is_banned: account.is_banned,
            bio: account.bio.clone().unwrap_or_default(),
            status: account.presence(),
            created_at: account.created_at,
        }
    }
}

impl From<Account> for CurrentUserResponse {
    fn from(account: Account) -> Self {
        Self::from(&account)
    }
}

impl From<&Account> for PublicUserResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            avatar: account.display_avatar(),
            bio: account.bio.clone().unwrap_or_default(),
            status: account.presence(),
            created_at: account.created_at,
        }
    }
}

impl From<&Account> for AdminUserResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            phone: account.phone.clone(),
            username: account.username.clone(),
            avatar: account.display_avatar(),
            energy: account.energy,
            is_banned: account.is_banned,
            created_at: account.created_at,
        }
    }
}

impl From<Photo> for PhotoResponse {
    fn from(photo: Photo) -> Self {
        Self {
            id: photo.id,
            url: photo.photo_url,
            display_order: photo.display_order,
            created_at: photo.created_at,
        }
    }
}

// ============================================================================
// Message Mappers
// ============================================================================

impl From<&ReactionCount> for ReactionCountResponse {
    fn from(count: &ReactionCount) -> Self {
        Self {
            emoji: count.emoji.clone(),
            count: count.count,
        }
    }
}

impl FeedMessageResponse {
    /// Build a feed entry, picking this message's counts out of a page-wide list
    pub fn from_entry(entry: FeedEntry, counts: &[ReactionCount]) -> Self {
        let avatar = resolve_avatar(
            entry.author.first_photo.as_deref(),
            entry.author.avatar_url.as_deref(),
            &entry.author.username,
        );
        let reactions = counts
            .iter()
            .filter(|count| count.message_id == entry.message.id)
            .map(ReactionCountResponse::from)
            .collect();

        Self {
            id: entry.message.id,
            text: entry.message.text,
            created_at: entry.message.created_at,
            user: AuthorResponse {
                id: entry.author.id,
                username: entry.author.username,
                avatar,
            },
            reactions,
        }
    }
}

// ============================================================================
// Conversation Mappers
// ============================================================================

impl From<ConversationMessage> for ConversationMessageResponse {
    fn from(item: ConversationMessage) -> Self {
        Self {
            id: item.message.id,
            sender_id: item.message.sender_id,
            receiver_id: item.message.receiver_id,
            text: item.message.text,
            is_read: item.message.is_read,
            created_at: item.message.created_at,
            sender: SenderResponse {
                username: item.sender_username,
                avatar_url: item.sender_avatar_url,
            },
        }
    }
}

impl From<ConversationSummary> for ConversationSummaryResponse {
    fn from(summary: ConversationSummary) -> Self {
        Self {
            user_id: summary.counterpart_id,
            username: summary.username,
            avatar_url: summary.avatar_url,
            status: Presence::from_activity(summary.last_activity, Utc::now()),
            last_message: summary.last_message,
            last_message_at: summary.last_message_at,
            unread_count: summary.unread_count,
        }
    }
}
