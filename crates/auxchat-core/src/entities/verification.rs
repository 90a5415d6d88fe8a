//! Verification code entity - one-time code proving control of a phone

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::error::DomainError;

/// Lifetime of an issued code
pub const CODE_TTL_MINUTES: i64 = 10;

/// Persisted one-time code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode {
    pub id: i64,
    pub phone: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl VerificationCode {
    /// Check if the code is past its expiry at `now`
    #[inline]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Evaluate a submitted value against this record.
    ///
    /// Rules apply in order: a used code is rejected before expiry is
    /// considered, and expiry before the value itself. The record is not
    /// mutated; marking it verified is the caller's job.
    pub fn check(&self, submitted: &str, now: DateTime<Utc>) -> Result<(), DomainError> {
        if self.verified {
            return Err(DomainError::CodeAlreadyUsed);
        }
        if self.is_expired_at(now) {
            return Err(DomainError::CodeExpired);
        }
        if self.code != submitted {
            return Err(DomainError::InvalidCode);
        }
        Ok(())
    }
}

/// Generate a random four digit code in `1000..=9999`
pub fn generate_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.gen_range(1000..=9999).to_string()
}
