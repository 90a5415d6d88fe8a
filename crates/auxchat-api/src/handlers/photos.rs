//! Photo gallery handlers

use axum::{extract::State, Json};
use auxchat_service::dto::{AddPhotoRequest, PhotoListResponse, PhotoResponse};
use auxchat_service::PhotoService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Own gallery
///
/// GET /users/@me/photos
pub async fn get_own_photos(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<PhotoListResponse>> {
    let service = PhotoService::new(state.service_context());
    Ok(Json(service.list(auth.user_id).await?))
}

/// Gallery of another user
///
/// GET /users/{user_id}/photos
pub async fn get_user_photos(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(user_id): IdPath<i64>,
) -> ApiResult<Json<PhotoListResponse>> {
    let service = PhotoService::new(state.service_context());
    Ok(Json(service.list(user_id).await?))
}

/// Add a photo
///
/// POST /users/@me/photos
pub async fn add_photo(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<AddPhotoRequest>,
) -> ApiResult<Created<PhotoResponse>> {
    let service = PhotoService::new(state.service_context());
    let photo = service.add(auth.user_id, request).await?;
    Ok(Created(photo))
}

/// Delete one of the caller's photos
///
/// DELETE /users/@me/photos/{photo_id}
pub async fn delete_photo(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(photo_id): IdPath<i64>,
) -> ApiResult<NoContent> {
    let service = PhotoService::new(state.service_context());
    service.delete(auth.user_id, photo_id).await?;
    Ok(NoContent)
}
