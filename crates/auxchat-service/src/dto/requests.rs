//! Request DTOs for API endpoints
//!
//! Length limits are enforced with `validator`; emptiness after trimming is
//! checked by the services so every entry point gets the same messages.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Ask for a verification code to be sent to a phone
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SendCodeRequest {
    #[serde(default)]
    pub phone: String,
}

/// Submit a verification code
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub code: String,
}

/// Create an account for a verified phone
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Phone token returned by code verification
    pub phone_token: String,

    #[validate(length(max = 32, message = "Username must be at most 32 characters"))]
    pub username: String,

    #[validate(length(max = 2048, message = "Avatar URL is too long"))]
    pub avatar_url: Option<String>,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Partial profile update; absent fields stay untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 32, message = "Username must be 1-32 characters"))]
    pub username: Option<String>,

    #[validate(length(max = 2048, message = "Avatar URL is too long"))]
    pub avatar_url: Option<String>,

    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,
}

/// Add a photo to the caller's gallery
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddPhotoRequest {
    #[validate(length(max = 2048, message = "Photo URL is too long"))]
    pub photo_url: String,
}

// ============================================================================
// Message Requests
// ============================================================================

/// Post a message to the public feed
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMessageRequest {
    pub text: String,
}

/// Feed paging parameters
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct MessageListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl MessageListQuery {
    pub const DEFAULT_LIMIT: i64 = 20;
    pub const MAX_LIMIT: i64 = 100;

    /// Limit clamped to `1..=100`
    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT)
    }

    /// Offset, never negative
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

/// Toggle an emoji reaction on a message
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ToggleReactionRequest {
    pub emoji: String,
}

/// Send a private message
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendPrivateMessageRequest {
    pub text: String,
}

// ============================================================================
// Upload Requests
// ============================================================================

/// Base64 image, optionally as a `data:` URL
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UploadImageRequest {
    pub file_data: String,
}

/// Base64 audio recording
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UploadVoiceRequest {
    pub audio_data: String,
    pub extension: Option<String>,
}

// ============================================================================
// Admin Requests
// ============================================================================

/// Largest energy adjustment a single admin action may apply
pub const MAX_ENERGY_ADJUSTMENT: i64 = 1_000_000;

/// Admin mutation request as posted by the panel
///
/// Every field is optional at the JSON level so the secret is checked before
/// the rest of the body is judged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AdminActionRequest {
    #[serde(default)]
    pub admin_secret: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub target_user_id: Option<i64>,
    #[serde(default)]
    pub amount: Option<i64>,
}

/// Parsed admin action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    AddEnergy(i32),
    Ban,
    Unban,
    Delete,
}

impl AdminActionRequest {
    /// Parse the action name; `add_energy` needs an amount within
    /// `±MAX_ENERGY_ADJUSTMENT`
    pub fn parse_action(&self) -> Result<AdminAction, String> {
        match self.action.as_str() {
            "add_energy" => {
                let amount = self.amount.ok_or_else(|| "Amount required".to_string())?;
                if !(-MAX_ENERGY_ADJUSTMENT..=MAX_ENERGY_ADJUSTMENT).contains(&amount) {
                    return Err("Amount out of range".to_string());
                }
                i32::try_from(amount)
                    .map(AdminAction::AddEnergy)
                    .map_err(|_| "Amount out of range".to_string())
            }
            "ban" => Ok(AdminAction::Ban),
            "unban" => Ok(AdminAction::Unban),
            "delete" => Ok(AdminAction::Delete),
            _ => Err("Invalid action".to_string()),
        }
    }

    /// Account the action applies to
    pub fn target(&self) -> Result<i64, String> {
        self.target_user_id
            .ok_or_else(|| "Target user required".to_string())
    }
}
