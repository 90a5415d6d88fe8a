//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in auxchat-core.

mod account;
mod error;
mod message;
mod photo;
mod private_message;
mod reaction;
mod verification;

pub use account::PgAccountRepository;
pub use message::PgMessageRepository;
pub use photo::PgPhotoRepository;
pub use private_message::PgPrivateMessageRepository;
pub use reaction::PgReactionRepository;
pub use verification::PgVerificationCodeRepository;
