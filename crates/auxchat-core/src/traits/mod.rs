//! Ports - interfaces implemented by the infrastructure crates

mod gateways;
mod repositories;

pub use gateways::{GatewayError, GatewayResult, ImageHost, ObjectStorage, SmsGateway};
pub use repositories::{
    AccountRepository, MessageRepository, PhotoRepository, PrivateMessageRepository,
    ReactionRepository, RepoResult, VerificationCodeRepository,
};
