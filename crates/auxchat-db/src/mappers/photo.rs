//! Photo model -> entity mapper

use auxchat_core::entities::Photo;

use crate::models::PhotoModel;

impl From<PhotoModel> for Photo {
    fn from(model: PhotoModel) -> Self {
        Photo {
            id: model.id,
            user_id: model.user_id,
            photo_url: model.photo_url,
            display_order: model.display_order,
            created_at: model.created_at,
        }
    }
}
