//! Admin service
//!
//! Shared-secret protected account management.

use auxchat_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{
    AdminAction, AdminActionRequest, AdminActionResponse, AdminUserResponse, AdminUsersResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All accounts, newest first
    #[instrument(skip(self, secret))]
    pub async fn list_users(&self, secret: Option<&str>) -> ServiceResult<AdminUsersResponse> {
        self.authorize(secret)?;

        let accounts = self.ctx.account_repo().list_all().await?;
        Ok(AdminUsersResponse {
            users: accounts.iter().map(AdminUserResponse::from).collect(),
        })
    }

    /// Apply an admin action to one account
    #[instrument(skip(self, request), fields(action = %request.action, target = ?request.target_user_id))]
    pub async fn perform(&self, request: AdminActionRequest) -> ServiceResult<AdminActionResponse> {
        self.authorize(Some(&request.admin_secret))?;

        let action = request.parse_action().map_err(ServiceError::validation)?;
        let target = request.target().map_err(ServiceError::validation)?;
        let accounts = self.ctx.account_repo();

        let message = match action {
            AdminAction::AddEnergy(amount) => {
                let energy = accounts
                    .add_energy(target, amount)
                    .await?
                    .ok_or(DomainError::AccountNotFound(target))?;
                info!(target, amount, energy, "Admin adjusted energy");
                format!("Added {amount} energy")
            }
            AdminAction::Ban | AdminAction::Unban => {
                let banned = action == AdminAction::Ban;
                if !accounts.set_banned(target, banned).await? {
                    return Err(DomainError::AccountNotFound(target).into());
                }
                info!(target, banned, "Admin changed ban status");
                if banned { "User banned" } else { "User unbanned" }.to_string()
            }
            AdminAction::Delete => {
                if !accounts.delete(target).await? {
                    return Err(DomainError::AccountNotFound(target).into());
                }
                info!(target, "Admin deleted account");
                "User deleted".to_string()
            }
        };

        Ok(AdminActionResponse::ok(message))
    }

    fn authorize(&self, secret: Option<&str>) -> ServiceResult<()> {
        let Some(expected) = self.ctx.settings().admin_secret.as_deref() else {
            warn!("Admin request rejected: admin secret is not configured");
            return Err(DomainError::InvalidAdminSecret.into());
        };

        if secret.map(str::trim) != Some(expected) {
            warn!("Admin request rejected: invalid secret");
            return Err(DomainError::InvalidAdminSecret.into());
        }

        Ok(())
    }
}
