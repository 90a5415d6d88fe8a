//! Media service
//!
//! Forwards images to the image host and stores voice recordings in object
//! storage. Provider failures surface as upstream errors; the detail stays in
//! the logs.

use auxchat_core::DomainError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Utc;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::dto::{UploadImageRequest, UploadResponse, UploadVoiceRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Recordings shorter than this are rejected
pub const MIN_AUDIO_BYTES: usize = 100;

const DEFAULT_VOICE_EXTENSION: &str = "webm";
const MAX_EXTENSION_LENGTH: usize = 8;

/// Media service
pub struct MediaService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MediaService<'a> {
    /// Create a new MediaService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Upload an image and return its public URL
    #[instrument(skip(self, request))]
    pub async fn upload_image(
        &self,
        user_id: i64,
        request: UploadImageRequest,
    ) -> ServiceResult<UploadResponse> {
        let payload = strip_data_url(&request.file_data);
        if payload.is_empty() {
            return Err(ServiceError::validation("File data required"));
        }
        STANDARD
            .decode(payload)
            .map_err(|_| ServiceError::validation("Invalid base64 data"))?;

        let url = self.ctx.image_host().upload(payload).await.map_err(|e| {
            error!(user_id, error = %e, "Image upload failed");
            ServiceError::upstream("Image host", e)
        })?;

        info!(user_id, url = %url, "Image uploaded");
        Ok(UploadResponse { url })
    }

    /// Store a voice recording and return its public URL
    #[instrument(skip(self, request))]
    pub async fn upload_voice(
        &self,
        user_id: i64,
        request: UploadVoiceRequest,
    ) -> ServiceResult<UploadResponse> {
        let payload = strip_data_url(&request.audio_data);
        if payload.is_empty() {
            return Err(ServiceError::validation("Audio data required"));
        }
        let audio = STANDARD
            .decode(payload)
            .map_err(|_| ServiceError::validation("Invalid base64 data"))?;
        if audio.len() < MIN_AUDIO_BYTES {
            return Err(DomainError::AudioTooShort.into());
        }

        let extension = voice_extension(request.extension.as_deref())?;
        let content_type = voice_content_type(&extension);
        let key = voice_object_key(&extension);
        let size = audio.len();

        let url = self
            .ctx
            .object_storage()
            .put(&key, content_type, audio)
            .await
            .map_err(|e| {
                error!(user_id, key = %key, error = %e, "Voice upload failed");
                ServiceError::upstream("Object storage", e)
            })?;

        info!(user_id, key = %key, size, "Voice message stored");
        Ok(UploadResponse { url })
    }
}

/// Drop a leading `data:<mime>;base64,` prefix if present
fn strip_data_url(data: &str) -> &str {
    let data = data.trim();
    match data.strip_prefix("data:") {
        Some(rest) => rest.split_once(',').map_or(rest, |(_, payload)| payload),
        None => data,
    }
}

fn voice_extension(raw: Option<&str>) -> ServiceResult<String> {
    let extension = raw
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .unwrap_or(DEFAULT_VOICE_EXTENSION);

    if extension.len() > MAX_EXTENSION_LENGTH
        || !extension.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(ServiceError::validation("Invalid file extension"));
    }

    Ok(extension.to_ascii_lowercase())
}

fn voice_content_type(extension: &str) -> &'static str {
    if extension == "webm" {
        "audio/webm"
    } else {
        "audio/mp4"
    }
}

fn voice_object_key(extension: &str) -> String {
    format!(
        "voice-messages/voice_{}_{}.{extension}",
        Utc::now().format("%Y%m%d_%H%M%S"),
        Uuid::new_v4()
    )
}
