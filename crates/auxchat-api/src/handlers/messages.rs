//! Message handlers
//!
//! The public feed and energy-gated posting.

use axum::{extract::State, Json};
use auxchat_service::dto::{CreateMessageRequest, MessageFeedResponse, PostMessageResponse};
use auxchat_service::MessageService;

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Read the feed
///
/// GET /messages?limit=&offset=
pub async fn get_messages(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<Json<MessageFeedResponse>> {
    let service = MessageService::new(state.service_context());
    let feed = service.list_messages(pagination.into()).await?;
    Ok(Json(feed))
}

/// Post a message, paying energy
///
/// POST /messages
pub async fn create_message(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateMessageRequest>,
) -> ApiResult<Created<PostMessageResponse>> {
    let service = MessageService::new(state.service_context());
    let posted = service.post_message(auth.user_id, request).await?;
    Ok(Created(posted))
}
