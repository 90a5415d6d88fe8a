//! Account entity - a registered chat user

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Energy granted to a freshly registered account
pub const INITIAL_ENERGY: i32 = 100;

/// An account counts as online for this long after its last activity
pub const ONLINE_WINDOW_SECS: i64 = 5 * 60;

/// Account entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub phone: String,
    pub username: String,
    pub avatar_url: Option<String>,
    pub energy: i32,
    pub is_banned: bool,
    pub bio: Option<String>,
    pub last_activity: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Derived online status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Offline,
}

impl Presence {
    /// Presence for a given last activity time, evaluated at `now`
    pub fn from_activity(last_activity: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        match last_activity {
            Some(at) if now - at < Duration::seconds(ONLINE_WINDOW_SECS) => Self::Online,
            _ => Self::Offline,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }
}

impl Account {
    /// Presence evaluated at `now`
    pub fn presence_at(&self, now: DateTime<Utc>) -> Presence {
        Presence::from_activity(self.last_activity, now)
    }

    /// Presence evaluated at the current time
    pub fn presence(&self) -> Presence {
        self.presence_at(Utc::now())
    }

    /// Check if the balance covers `cost`
    #[inline]
    pub fn can_afford(&self, cost: i32) -> bool {
        self.energy >= cost
    }

    /// Avatar shown to other users
    pub fn display_avatar(&self) -> String {
        resolve_avatar(None, self.avatar_url.as_deref(), &self.username)
    }
}

/// Data required to register an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub phone: String,
    pub username: String,
    pub avatar_url: Option<String>,
}

/// Partial profile update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.avatar_url.is_none() && self.bio.is_none()
    }
}

/// Generated placeholder avatar for accounts without any picture
pub fn default_avatar_url(username: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={username}")
}

/// Pick the avatar to display: first gallery photo, then the profile avatar,
/// then a generated placeholder.
pub fn resolve_avatar(first_photo: Option<&str>, avatar_url: Option<&str>, username: &str) -> String {
    first_photo
        .filter(|url| !url.is_empty())
        .or(avatar_url.filter(|url| !url.is_empty()))
        .map_or_else(|| default_avatar_url(username), str::to_string)
}
