//! Gallery photo database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for user_photos table
#[derive(Debug, Clone, FromRow)]
pub struct PhotoModel {
    pub id: i64,
    pub user_id: i64,
    pub photo_url: String,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}
