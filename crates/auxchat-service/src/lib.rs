//! # auxchat-service
//!
//! Application layer containing business rules, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AccountService, AdminService, AuthService, DeliveryOutcome, MediaService, MessageService,
    PhotoService, PrivateMessageService, ReactionService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, ServiceSettings, VerificationService,
};
