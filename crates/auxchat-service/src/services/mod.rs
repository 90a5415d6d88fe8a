//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of one
//! request and orchestrates repositories and outbound providers.

pub mod account;
pub mod admin;
pub mod auth;
pub mod context;
pub mod error;
pub mod media;
pub mod message;
pub mod photo;
pub mod private_message;
pub mod reaction;
pub mod verification;

pub use account::AccountService;
pub use admin::AdminService;
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder, ServiceSettings};
pub use error::{ServiceError, ServiceResult};
pub use media::MediaService;
pub use message::MessageService;
pub use photo::PhotoService;
pub use private_message::PrivateMessageService;
pub use reaction::ReactionService;
pub use verification::{DeliveryOutcome, VerificationService};
