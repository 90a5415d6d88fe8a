//! Photo service
//!
//! Per-account gallery capped at [`MAX_PHOTOS`].

use auxchat_core::{DomainError, MAX_PHOTOS};
use tracing::{info, instrument};

use crate::dto::{AddPhotoRequest, PhotoListResponse, PhotoResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Photo service
pub struct PhotoService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PhotoService<'a> {
    /// Create a new PhotoService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Gallery of an account in display order
    #[instrument(skip(self))]
    pub async fn list(&self, user_id: i64) -> ServiceResult<PhotoListResponse> {
        let photos = self
            .ctx
            .photo_repo()
            .list_for_account(user_id, MAX_PHOTOS)
            .await?;

        Ok(PhotoListResponse {
            photos: photos.into_iter().map(Into::into).collect(),
        })
    }

    /// Append a photo unless the gallery is full
    #[instrument(skip(self, request))]
    pub async fn add(&self, user_id: i64, request: AddPhotoRequest) -> ServiceResult<PhotoResponse> {
        let url = request.photo_url.trim();
        if url.is_empty() {
            return Err(ServiceError::validation("Photo URL required"));
        }

        let photo = self
            .ctx
            .photo_repo()
            .create_capped(user_id, url, MAX_PHOTOS)
            .await?
            .ok_or(DomainError::PhotoLimitReached { max: MAX_PHOTOS })?;

        info!(user_id, photo_id = photo.id, "Photo added");

        Ok(photo.into())
    }

    /// Remove one of the caller's photos
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: i64, photo_id: i64) -> ServiceResult<()> {
        if !self.ctx.photo_repo().delete(user_id, photo_id).await? {
            return Err(DomainError::PhotoNotFound(photo_id).into());
        }

        info!(user_id, photo_id, "Photo deleted");
        Ok(())
    }
}
