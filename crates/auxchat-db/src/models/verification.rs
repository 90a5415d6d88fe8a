//! SMS code database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for sms_codes table
#[derive(Debug, Clone, FromRow)]
pub struct VerificationCodeModel {
    pub id: i64,
    pub phone: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}
