//! Media upload handlers

use axum::{extract::State, Json};
use auxchat_service::dto::{UploadImageRequest, UploadResponse, UploadVoiceRequest};
use auxchat_service::MediaService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Upload an image to the image host
///
/// POST /uploads/image
pub async fn upload_image(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UploadImageRequest>,
) -> ApiResult<Json<UploadResponse>> {
    let service = MediaService::new(state.service_context());
    Ok(Json(service.upload_image(auth.user_id, request).await?))
}

/// Store a voice message
///
/// POST /uploads/voice
pub async fn upload_voice(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UploadVoiceRequest>,
) -> ApiResult<Json<UploadResponse>> {
    let service = MediaService::new(state.service_context());
    Ok(Json(service.upload_voice(auth.user_id, request).await?))
}
