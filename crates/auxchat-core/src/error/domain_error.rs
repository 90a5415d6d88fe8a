//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found")]
    AccountNotFound(i64),

    #[error("Message not found")]
    MessageNotFound(i64),

    #[error("Photo not found")]
    PhotoNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("{0}")]
    ValidationError(String),

    #[error("Invalid phone number")]
    InvalidPhone,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Verification Code Rejections
    // =========================================================================
    #[error("Code not found")]
    CodeNotFound,

    #[error("Code already used")]
    CodeAlreadyUsed,

    #[error("Code expired")]
    CodeExpired,

    #[error("Invalid code")]
    InvalidCode,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Not enough energy")]
    NotEnoughEnergy,

    #[error("Maximum {max} photos allowed")]
    PhotoLimitReached { max: i64 },

    #[error("Audio too short")]
    AudioTooShort,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("User is banned")]
    AccountBanned,

    #[error("Invalid admin secret")]
    InvalidAdminSecret,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("User already exists")]
    AccountAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::AccountNotFound(_) => "UNKNOWN_USER",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::PhotoNotFound(_) => "UNKNOWN_PHOTO",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidPhone => "INVALID_PHONE",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Verification
            Self::CodeNotFound => "CODE_NOT_FOUND",
            Self::CodeAlreadyUsed => "CODE_ALREADY_USED",
            Self::CodeExpired => "CODE_EXPIRED",
            Self::InvalidCode => "INVALID_CODE",

            // Business Rules
            Self::NotEnoughEnergy => "NOT_ENOUGH_ENERGY",
            Self::PhotoLimitReached { .. } => "PHOTO_LIMIT_REACHED",
            Self::AudioTooShort => "AUDIO_TOO_SHORT",

            // Authorization
            Self::AccountBanned => "USER_BANNED",
            Self::InvalidAdminSecret => "INVALID_ADMIN_SECRET",

            // Conflict
            Self::AccountAlreadyExists => "USER_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AccountNotFound(_) | Self::MessageNotFound(_) | Self::PhotoNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidPhone | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is a rejected request that the caller can correct
    /// (verification failures, energy and gallery limits)
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            Self::CodeNotFound
                | Self::CodeAlreadyUsed
                | Self::CodeExpired
                | Self::InvalidCode
                | Self::NotEnoughEnergy
                | Self::PhotoLimitReached { .. }
                | Self::AudioTooShort
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::AccountBanned | Self::InvalidAdminSecret)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AccountAlreadyExists)
    }
}
