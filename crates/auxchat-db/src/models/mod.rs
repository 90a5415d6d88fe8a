//! Database models - SQLx-compatible structs for PostgreSQL tables

mod account;
mod message;
mod photo;
mod private_message;
mod reaction;
mod verification;

pub use account::AccountModel;
pub use message::{FeedRowModel, MessageModel};
pub use photo::PhotoModel;
pub use private_message::{ConversationMessageModel, ConversationSummaryModel, PrivateMessageModel};
pub use reaction::ReactionCountModel;
pub use verification::VerificationCodeModel;
