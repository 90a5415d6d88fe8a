//! Photo entity - an entry in a user's gallery

use chrono::{DateTime, Utc};

/// Gallery capacity per account
pub const MAX_PHOTOS: i64 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: i64,
    pub user_id: i64,
    pub photo_url: String,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}
