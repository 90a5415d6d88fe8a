//! User handlers
//!
//! Own and public profiles.

use axum::{extract::State, Json};
use auxchat_service::dto::{CurrentUserResponse, PublicUserResponse, UpdateProfileRequest};
use auxchat_service::AccountService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get current user
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.get_current(auth.user_id).await?;
    Ok(Json(response))
}

/// Update current user
///
/// PATCH /users/@me
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.update_profile(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Get user by ID (public profile)
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(user_id): IdPath<i64>,
) -> ApiResult<Json<PublicUserResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.get_user(user_id).await?;
    Ok(Json(response))
}
