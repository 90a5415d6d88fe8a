//! Reaction handlers

use axum::{extract::State, Json};
use auxchat_service::dto::{ReactionToggleResponse, ToggleReactionRequest};
use auxchat_service::ReactionService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Toggle the caller's reaction
///
/// POST /messages/{message_id}/reactions
pub async fn toggle_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(message_id): IdPath<i64>,
    ValidatedJson(request): ValidatedJson<ToggleReactionRequest>,
) -> ApiResult<Json<ReactionToggleResponse>> {
    let service = ReactionService::new(state.service_context());
    let response = service.toggle(auth.user_id, message_id, request).await?;
    Ok(Json(response))
}
