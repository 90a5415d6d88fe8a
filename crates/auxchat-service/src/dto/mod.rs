//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    AddPhotoRequest, AdminAction, AdminActionRequest, CreateMessageRequest, MessageListQuery,
    RefreshTokenRequest, RegisterRequest, SendCodeRequest, SendPrivateMessageRequest,
    ToggleReactionRequest, UpdateProfileRequest, UploadImageRequest, UploadVoiceRequest,
    VerifyCodeRequest,
};

pub use responses::{
    AdminActionResponse, AdminUserResponse, AdminUsersResponse, AuthResponse, AuthorResponse,
    ConversationListResponse, ConversationMessageResponse, ConversationResponse,
    ConversationSummaryResponse, CurrentUserResponse, FeedMessageResponse, HealthChecks,
    HealthResponse, MessageFeedResponse, PhotoListResponse, PhotoResponse, PostMessageResponse,
    PublicUserResponse, ReactionCountResponse, ReactionToggleResponse, ReadinessResponse,
    SendCodeResponse, SenderResponse, SentPrivateMessageResponse, UploadResponse,
    VerifyCodeResponse,
};
