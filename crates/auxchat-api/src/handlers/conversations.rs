//! Private conversation handlers

use axum::{extract::State, Json};
use auxchat_service::dto::{
    ConversationListResponse, ConversationResponse, SendPrivateMessageRequest,
    SentPrivateMessageResponse,
};
use auxchat_service::PrivateMessageService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Conversation list
///
/// GET /conversations
pub async fn get_conversations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ConversationListResponse>> {
    let service = PrivateMessageService::new(state.service_context());
    Ok(Json(service.list_conversations(auth.user_id).await?))
}

/// Messages with one user; marks theirs as read
///
/// GET /conversations/{user_id}/messages
pub async fn get_conversation(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(other_id): IdPath<i64>,
) -> ApiResult<Json<ConversationResponse>> {
    let service = PrivateMessageService::new(state.service_context());
    Ok(Json(service.conversation(auth.user_id, other_id).await?))
}

/// Send a private message
///
/// POST /conversations/{user_id}/messages
pub async fn send_message(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(receiver_id): IdPath<i64>,
    ValidatedJson(request): ValidatedJson<SendPrivateMessageRequest>,
) -> ApiResult<Created<SentPrivateMessageResponse>> {
    let service = PrivateMessageService::new(state.service_context());
    let sent = service.send(auth.user_id, receiver_id, request).await?;
    Ok(Created(sent))
}
