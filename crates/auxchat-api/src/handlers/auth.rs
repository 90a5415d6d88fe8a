//! Authentication handlers
//!
//! SMS code issuance and verification, registration and token refresh.

use axum::{extract::State, Json};
use auxchat_service::dto::{
    AuthResponse, RefreshTokenRequest, RegisterRequest, SendCodeRequest, SendCodeResponse,
    VerifyCodeRequest, VerifyCodeResponse,
};
use auxchat_service::{AuthService, VerificationService};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Send a verification code
///
/// POST /auth/sms/send
pub async fn send_code(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SendCodeRequest>,
) -> ApiResult<Json<SendCodeResponse>> {
    let service = VerificationService::new(state.service_context());
    let response = service.issue_code(request).await?;
    Ok(Json(response))
}

/// Verify a code, logging in when the phone already has an account
///
/// POST /auth/sms/verify
pub async fn verify_code(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<VerifyCodeRequest>,
) -> ApiResult<Json<VerifyCodeResponse>> {
    let service = VerificationService::new(state.service_context());
    let response = service.verify_code(request).await?;
    Ok(Json(response))
}

/// Register a new account for a verified phone
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(response))
}

/// Refresh access token
///
/// POST /auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh_token(request).await?;
    Ok(Json(response))
}
