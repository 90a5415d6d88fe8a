//! # auxchat-core
//!
//! Domain layer containing entities, value objects, repository traits and the
//! ports for outbound providers (SMS, image host, object storage).
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    default_avatar_url, generate_code, resolve_avatar, Account, ConversationMessage,
    ConversationSummary, FeedEntry, Message, MessageAuthor, NewAccount, Photo, PostedMessage,
    Presence, PrivateMessage, ProfileUpdate, Reaction, ReactionCount, ReactionToggle,
    VerificationCode, CODE_TTL_MINUTES, INITIAL_ENERGY, MAX_EMOJI_LENGTH, MAX_MESSAGE_LENGTH,
    MAX_PHOTOS, MESSAGE_COST, ONLINE_WINDOW_SECS,
};
pub use error::DomainError;
pub use traits::{
    AccountRepository, GatewayError, GatewayResult, ImageHost, MessageRepository, ObjectStorage,
    PhotoRepository, PrivateMessageRepository, ReactionRepository, RepoResult, SmsGateway,
    VerificationCodeRepository,
};
pub use value_objects::PhoneNumber;
