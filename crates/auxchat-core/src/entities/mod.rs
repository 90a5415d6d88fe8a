//! Domain entities - core business objects

mod account;
mod message;
mod photo;
mod private_message;
mod reaction;
mod verification;

pub use account::{
    default_avatar_url, resolve_avatar, Account, NewAccount, Presence, ProfileUpdate,
    INITIAL_ENERGY, ONLINE_WINDOW_SECS,
};
pub use message::{FeedEntry, Message, MessageAuthor, PostedMessage, MAX_MESSAGE_LENGTH, MESSAGE_COST};
pub use photo::{Photo, MAX_PHOTOS};
pub use private_message::{ConversationMessage, ConversationSummary, PrivateMessage};
pub use reaction::{Reaction, ReactionCount, ReactionToggle, MAX_EMOJI_LENGTH};
pub use verification::{generate_code, VerificationCode, CODE_TTL_MINUTES};
