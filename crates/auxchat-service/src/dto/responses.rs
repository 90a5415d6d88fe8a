//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use auxchat_common::TokenPair;
use auxchat_core::Presence;
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Code issuance acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct SendCodeResponse {
    pub success: bool,
    pub message: String,
}

impl SendCodeResponse {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: "SMS sent".to_string(),
        }
    }
}

/// Session returned by registration, refresh and login-by-verification
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(tokens: TokenPair, user: CurrentUserResponse) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: tokens.token_type,
            expires_in: tokens.expires_in,
            user,
        }
    }
}

/// Result of a successful code verification
#[derive(Debug, Clone, Serialize)]
pub struct VerifyCodeResponse {
    pub success: bool,
    /// Proof of phone control, required by registration
    pub phone_token: String,
    pub phone_token_expires_in: i64,
    /// Whether an account already exists for this phone
    pub registered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<AuthResponse>,
}

// ============================================================================
// User Responses
// ============================================================================

/// Full profile of the caller
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: i64,
    pub phone: String,
    pub username: String,
    pub avatar: String,
    pub energy: i32,
    pub is_banned: bool,
    pub bio: String,
    pub status: Presence,
    pub created_at: DateTime<Utc>,
}

/// Profile as seen by other users
#[derive(Debug, Clone, Serialize)]
pub struct PublicUserResponse {
    pub id: i64,
    pub username: String,
    pub avatar: String,
    pub bio: String,
    pub status: Presence,
    pub created_at: DateTime<Utc>,
}

/// Gallery photo
#[derive(Debug, Clone, Serialize)]
pub struct PhotoResponse {
    pub id: i64,
    pub url: String,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

/// Gallery listing
#[derive(Debug, Clone, Serialize)]
pub struct PhotoListResponse {
    pub photos: Vec<PhotoResponse>,
}

// ============================================================================
// Message Responses
// ============================================================================

/// Author block of a feed entry
#[derive(Debug, Clone, Serialize)]
pub struct AuthorResponse {
    pub id: i64,
    pub username: String,
    pub avatar: String,
}

/// Aggregated emoji count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionCountResponse {
    pub emoji: String,
    pub count: i64,
}

/// One message in the public feed
#[derive(Debug, Clone, Serialize)]
pub struct FeedMessageResponse {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub user: AuthorResponse,
    pub reactions: Vec<ReactionCountResponse>,
}

/// Feed page
#[derive(Debug, Clone, Serialize)]
pub struct MessageFeedResponse {
    pub messages: Vec<FeedMessageResponse>,
}

/// Result of an energy-gated post
#[derive(Debug, Clone, Serialize)]
pub struct PostMessageResponse {
    pub success: bool,
    pub message_id: i64,
    pub new_energy: i32,
}

/// Result of a reaction toggle
#[derive(Debug, Clone, Serialize)]
pub struct ReactionToggleResponse {
    pub success: bool,
    pub action: String,
}

// ============================================================================
// Conversation Responses
// ============================================================================

/// Sender block of a private message
#[derive(Debug, Clone, Serialize)]
pub struct SenderResponse {
    pub username: String,
    pub avatar_url: Option<String>,
}

/// One private message
#[derive(Debug, Clone, Serialize)]
pub struct ConversationMessageResponse {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub text: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub sender: SenderResponse,
}

/// Messages exchanged with one counterpart
#[derive(Debug, Clone, Serialize)]
pub struct ConversationResponse {
    pub messages: Vec<ConversationMessageResponse>,
}

/// Acknowledgement of a sent private message
#[derive(Debug, Clone, Serialize)]
pub struct SentPrivateMessageResponse {
    pub success: bool,
    pub message_id: i64,
}

/// One row of the conversation list
#[derive(Debug, Clone, Serialize)]
pub struct ConversationSummaryResponse {
    pub user_id: i64,
    pub username: String,
    pub avatar_url: Option<String>,
    pub status: Presence,
    pub last_message: String,
    pub last_message_at: DateTime<Utc>,
    pub unread_count: i64,
}

/// Conversation list
#[derive(Debug, Clone, Serialize)]
pub struct ConversationListResponse {
    pub conversations: Vec<ConversationSummaryResponse>,
}

// ============================================================================
// Upload Responses
// ============================================================================

/// Public URL of an uploaded file
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

// ============================================================================
// Admin Responses
// ============================================================================

/// Account row shown in the admin panel
#[derive(Debug, Clone, Serialize)]
pub struct AdminUserResponse {
    pub id: i64,
    pub phone: String,
    pub username: String,
    pub avatar: String,
    pub energy: i32,
    pub is_banned: bool,
    pub created_at: DateTime<Utc>,
}

/// Admin account listing
#[derive(Debug, Clone, Serialize)]
pub struct AdminUsersResponse {
    pub users: Vec<AdminUserResponse>,
}

/// Outcome of an admin mutation
#[derive(Debug, Clone, Serialize)]
pub struct AdminActionResponse {
    pub success: bool,
    pub message: String,
}

impl AdminActionResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

// ============================================================================
// Health Check Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
