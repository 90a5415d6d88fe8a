//! Admin panel handlers

use axum::{extract::State, Json};
use auxchat_service::dto::{AdminActionRequest, AdminActionResponse, AdminUsersResponse};
use auxchat_service::AdminService;

use crate::extractors::{AdminSecret, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// List all accounts
///
/// GET /admin/users (secret in `X-Admin-Secret`)
pub async fn list_users(
    State(state): State<AppState>,
    secret: AdminSecret,
) -> ApiResult<Json<AdminUsersResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.list_users(secret.as_deref()).await?))
}

/// Apply an admin action
///
/// POST /admin/users (secret in the body)
pub async fn perform_action(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AdminActionRequest>,
) -> ApiResult<Json<AdminActionResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.perform(request).await?))
}
