//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    Account, ConversationMessage, ConversationSummary, FeedEntry, NewAccount, Photo,
    PostedMessage, PrivateMessage, ProfileUpdate, ReactionCount, ReactionToggle,
    VerificationCode,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Account Repository
// ============================================================================

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find account by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Account>>;

    /// Find account by phone number
    async fn find_by_phone(&self, phone: &str) -> RepoResult<Option<Account>>;

    /// Create a new account with the initial energy balance.
    /// Fails with `AccountAlreadyExists` if the phone is taken.
    async fn create(&self, account: &NewAccount) -> RepoResult<Account>;

    /// Apply a partial profile update, returning the updated account
    async fn update_profile(&self, id: i64, update: &ProfileUpdate) -> RepoResult<Option<Account>>;

    /// Record activity now (drives the online status)
    async fn touch_activity(&self, id: i64) -> RepoResult<()>;

    /// List all accounts, newest first
    async fn list_all(&self) -> RepoResult<Vec<Account>>;

    /// Add `amount` (possibly negative) to the balance, returning the new balance
    async fn add_energy(&self, id: i64, amount: i32) -> RepoResult<Option<i32>>;

    /// Set the ban flag; false if the account does not exist
    async fn set_banned(&self, id: i64, banned: bool) -> RepoResult<bool>;

    /// Delete the account together with its messages, reactions,
    /// private messages and photos; false if the account does not exist
    async fn delete(&self, id: i64) -> RepoResult<bool>;
}

// ============================================================================
// Verification Code Repository
// ============================================================================

#[async_trait]
pub trait VerificationCodeRepository: Send + Sync {
    /// Remove every code for the phone and store a fresh unverified one,
    /// atomically
    async fn replace(
        &self,
        phone: &str,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<VerificationCode>;

    /// Most recently created code for the phone
    async fn find_latest(&self, phone: &str) -> RepoResult<Option<VerificationCode>>;

    /// Flip `verified` to true if it is still false; returns whether this call did it
    async fn mark_verified(&self, id: i64) -> RepoResult<bool>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Debit `cost` energy from the author and insert the message in one
    /// transaction. Fails with `AccountNotFound`, `AccountBanned` or
    /// `NotEnoughEnergy` without touching any state.
    async fn post_with_energy(&self, user_id: i64, text: &str, cost: i32)
        -> RepoResult<PostedMessage>;

    /// Check if a message exists
    async fn exists(&self, id: i64) -> RepoResult<bool>;

    /// List messages oldest first with author details
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<FeedEntry>>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Remove the reaction if present, otherwise add it
    async fn toggle(&self, message_id: i64, user_id: i64, emoji: &str)
        -> RepoResult<ReactionToggle>;

    /// Count reactions by emoji for a set of messages
    async fn counts_for_messages(&self, message_ids: &[i64]) -> RepoResult<Vec<ReactionCount>>;
}

// ============================================================================
// Private Message Repository
// ============================================================================

#[async_trait]
pub trait PrivateMessageRepository: Send + Sync {
    /// Store a new unread message
    async fn create(&self, sender_id: i64, receiver_id: i64, text: &str)
        -> RepoResult<PrivateMessage>;

    /// Messages exchanged between two accounts in either direction, oldest first
    async fn find_conversation(
        &self,
        user_id: i64,
        other_user_id: i64,
        limit: i64,
    ) -> RepoResult<Vec<ConversationMessage>>;

    /// Mark everything `sender_id` sent to `receiver_id` as read
    async fn mark_read(&self, receiver_id: i64, sender_id: i64) -> RepoResult<u64>;

    /// Latest message per counterpart with unread counts, newest first
    async fn list_conversations(&self, user_id: i64) -> RepoResult<Vec<ConversationSummary>>;
}

// ============================================================================
// Photo Repository
// ============================================================================

#[async_trait]
pub trait PhotoRepository: Send + Sync {
    /// Gallery ordered by display order, then newest first
    async fn list_for_account(&self, user_id: i64, limit: i64) -> RepoResult<Vec<Photo>>;

    /// Insert a photo unless the account already holds `max` photos.
    /// Returns `None` when the gallery is full.
    async fn create_capped(&self, user_id: i64, photo_url: &str, max: i64)
        -> RepoResult<Option<Photo>>;

    /// Delete a photo owned by `user_id`; false if no such photo
    async fn delete(&self, user_id: i64, photo_id: i64) -> RepoResult<bool>;
}
