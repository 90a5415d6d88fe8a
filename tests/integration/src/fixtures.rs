//! Test fixtures and data generators
//!
//! Provides reusable request bodies and response shapes for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A phone number no other test run is likely to have used
pub fn unique_phone() -> String {
    let random = uuid::Uuid::new_v4().as_u128() % 1_000_000_000;
    format!("+15{random:09}")
}

/// Phone + code body shared by the SMS endpoints
#[derive(Debug, Serialize)]
pub struct SmsRequest {
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl SmsRequest {
    pub fn send(phone: &str) -> Self {
        Self {
            phone: phone.to_string(),
            code: None,
        }
    }

    pub fn verify(phone: &str, code: &str) -> Self {
        Self {
            phone: phone.to_string(),
            code: Some(code.to_string()),
        }
    }
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub phone_token: String,
    pub username: String,
}

impl RegisterRequest {
    pub fn unique(phone_token: &str) -> Self {
        Self {
            phone_token: phone_token.to_string(),
            username: format!("tester{}", unique_suffix()),
        }
    }
}

/// Verification response
#[derive(Debug, Deserialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub phone_token: String,
    pub registered: bool,
    pub session: Option<AuthResponse>,
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// Own profile
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub phone: String,
    pub username: String,
    pub avatar: String,
    pub energy: i32,
    pub is_banned: bool,
}

/// Result of posting to the feed
#[derive(Debug, Deserialize)]
pub struct PostMessageResponse {
    pub success: bool,
    pub message_id: i64,
    pub new_energy: i32,
}

/// Feed page
#[derive(Debug, Deserialize)]
pub struct FeedResponse {
    pub messages: Vec<FeedMessage>,
}

#[derive(Debug, Deserialize)]
pub struct FeedMessage {
    pub id: i64,
    pub text: String,
    pub user: FeedAuthor,
    pub reactions: Vec<ReactionCount>,
}

#[derive(Debug, Deserialize)]
pub struct FeedAuthor {
    pub id: i64,
    pub username: String,
    pub avatar: String,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct ReactionCount {
    pub emoji: String,
    pub count: i64,
}

/// Reaction toggle result
#[derive(Debug, Deserialize)]
pub struct ReactionToggleResponse {
    pub success: bool,
    pub action: String,
}

/// Gallery listing
#[derive(Debug, Deserialize)]
pub struct PhotoListResponse {
    pub photos: Vec<PhotoResponse>,
}

#[derive(Debug, Deserialize)]
pub struct PhotoResponse {
    pub id: i64,
    pub url: String,
    pub display_order: i32,
}

/// Conversation list entry
#[derive(Debug, Deserialize)]
pub struct ConversationSummary {
    pub user_id: i64,
    pub username: String,
    pub last_message: String,
    pub unread_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct ConversationListResponse {
    pub conversations: Vec<ConversationSummary>,
}

#[derive(Debug, Deserialize)]
pub struct ConversationMessage {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub text: String,
    pub is_read: bool,
}

#[derive(Debug, Deserialize)]
pub struct ConversationResponse {
    pub messages: Vec<ConversationMessage>,
}

/// Admin mutation body
#[derive(Debug, Serialize)]
pub struct AdminActionRequest {
    pub admin_secret: String,
    pub action: String,
    pub target_user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i32>,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}
