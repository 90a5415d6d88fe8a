//! SMS code model -> entity mapper

use auxchat_core::entities::VerificationCode;

use crate::models::VerificationCodeModel;

impl From<VerificationCodeModel> for VerificationCode {
    fn from(model: VerificationCodeModel) -> Self {
        VerificationCode {
            id: model.id,
            phone: model.phone,
            code: model.code,
            expires_at: model.expires_at,
            verified: model.verified,
            created_at: model.created_at,
        }
    }
}
