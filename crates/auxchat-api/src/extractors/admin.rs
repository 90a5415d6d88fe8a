//! Admin secret extractor

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::response::ApiError;

/// Header carrying the admin shared secret on read requests
pub const ADMIN_SECRET_HEADER: &str = "x-admin-secret";

/// Value of the `X-Admin-Secret` header, if any
///
/// Checking the value is the admin service's job.
#[derive(Debug, Clone, Default)]
pub struct AdminSecret(pub Option<String>);

impl AdminSecret {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminSecret
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let secret = parts
            .headers
            .get(ADMIN_SECRET_HEADER)
            .map(|value| {
                value
                    .to_str()
                    .map(str::to_string)
                    .map_err(|_| ApiError::invalid_body("Invalid X-Admin-Secret header"))
            })
            .transpose()?;

        Ok(AdminSecret(secret))
    }
}
