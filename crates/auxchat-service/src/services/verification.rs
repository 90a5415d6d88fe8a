//! Verification service
//!
//! Issues one-time SMS codes and checks them. Issuance commits the code
//! before talking to the SMS gateway; delivery is best effort and its outcome
//! never reaches the caller.

use auxchat_core::{generate_code, DomainError, PhoneNumber, CODE_TTL_MINUTES};
use chrono::{Duration, Utc};
use tracing::{info, instrument, warn};

use crate::dto::{
    AuthResponse, SendCodeRequest, SendCodeResponse, VerifyCodeRequest, VerifyCodeResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// What happened when the code was handed to the SMS gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered { gateway: &'static str },
    Failed { gateway: &'static str, reason: String },
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }
}

/// Verification service
pub struct VerificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VerificationService<'a> {
    /// Create a new VerificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Issue a fresh code for a phone, superseding any earlier one
    #[instrument(skip(self, request))]
    pub async fn issue_code(&self, request: SendCodeRequest) -> ServiceResult<SendCodeResponse> {
        let phone = PhoneNumber::parse(&request.phone)?;

        let code = if self.is_test_phone(&phone) {
            self.ctx.settings().test_code.clone()
        } else {
            generate_code(&mut rand::thread_rng())
        };

        let expires_at = Utc::now() + Duration::minutes(CODE_TTL_MINUTES);
        self.ctx
            .verification_repo()
            .replace(phone.as_str(), &code, expires_at)
            .await?;

        info!(phone = %phone, code = %code, "Verification code issued");

        self.deliver_code(&phone, &code).await;

        Ok(SendCodeResponse::sent())
    }

    /// Send an already persisted code; failures are logged, never returned
    #[instrument(skip(self, code))]
    pub async fn deliver_code(&self, phone: &PhoneNumber, code: &str) -> DeliveryOutcome {
        let gateway = self.ctx.sms_gateway();
        let text = format!("Your AuxChat login code: {code}");

        let outcome = match gateway.send(phone.as_str(), &text).await {
            Ok(()) => DeliveryOutcome::Delivered {
                gateway: gateway.name(),
            },
            Err(e) => DeliveryOutcome::Failed {
                gateway: gateway.name(),
                reason: e.to_string(),
            },
        };

        match &outcome {
            DeliveryOutcome::Delivered { gateway } => {
                info!(phone = %phone, gateway, "Verification code delivered");
            }
            DeliveryOutcome::Failed { gateway, reason } => {
                warn!(phone = %phone, gateway, reason = %reason, code, "SMS delivery failed");
            }
        }

        outcome
    }

    /// Check a submitted code; on success hand out a phone token and, for
    /// known phones, a session
    #[instrument(skip(self, request))]
    pub async fn verify_code(&self, request: VerifyCodeRequest) -> ServiceResult<VerifyCodeResponse> {
        let submitted = request.code.trim();
        if request.phone.trim().is_empty() || submitted.is_empty() {
            return Err(ServiceError::validation("Phone and code required"));
        }
        let phone = PhoneNumber::parse(&request.phone)?;

        let stored = self
            .ctx
            .verification_repo()
            .find_latest(phone.as_str())
            .await?
            .ok_or_else(|| {
                warn!(phone = %phone, "Verification rejected: no code issued");
                DomainError::CodeNotFound
            })?;

        if let Err(e) = stored.check(submitted, Utc::now()) {
            warn!(phone = %phone, reason = %e, "Verification rejected");
            return Err(e.into());
        }

        if !self.ctx.verification_repo().mark_verified(stored.id).await? {
            warn!(phone = %phone, "Verification rejected: code consumed concurrently");
            return Err(DomainError::CodeAlreadyUsed.into());
        }

        let jwt = self.ctx.jwt_service();
        let phone_token = jwt.generate_phone_token(phone.as_str())?;

        let session = match self.ctx.account_repo().find_by_phone(phone.as_str()).await? {
            Some(account) => {
                let tokens = jwt.generate_token_pair(account.id)?;
                Some(AuthResponse::new(tokens, account.into()))
            }
            None => None,
        };

        info!(phone = %phone, registered = session.is_some(), "Phone verified");

        Ok(VerifyCodeResponse {
            success: true,
            phone_token: phone_token.token,
            phone_token_expires_in: phone_token.expires_in,
            registered: session.is_some(),
            session,
        })
    }

    fn is_test_phone(&self, phone: &PhoneNumber) -> bool {
        PhoneNumber::parse(&self.ctx.settings().test_phone)
            .is_ok_and(|test_phone| test_phone == *phone)
    }
}
