//! Account model -> entity mapper

use auxchat_core::entities::Account;

use crate::models::AccountModel;

impl From<AccountModel> for Account {
    fn from(model: AccountModel) -> Self {
        Account {
            id: model.id,
            phone: model.phone,
            username: model.username,
            avatar_url: model.avatar_url,
            energy: model.energy,
            is_banned: model.is_banned,
            bio: model.bio,
            last_activity: model.last_activity,
            created_at: model.created_at,
        }
    }
}
