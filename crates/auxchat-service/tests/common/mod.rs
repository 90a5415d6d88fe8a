//! In-memory implementations of the repository and provider ports

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use auxchat_common::JwtService;
use auxchat_core::traits::{
    AccountRepository, GatewayError, GatewayResult, ImageHost, MessageRepository, ObjectStorage,
    PhotoRepository, PrivateMessageRepository, ReactionRepository, RepoResult, SmsGateway,
    VerificationCodeRepository,
};
use auxchat_core::{
    Account, ConversationMessage, ConversationSummary, DomainError, FeedEntry, Message,
    MessageAuthor, NewAccount, Photo, PostedMessage, PrivateMessage, ProfileUpdate, Reaction,
    ReactionCount, ReactionToggle, VerificationCode, INITIAL_ENERGY,
};
use auxchat_service::{ServiceContext, ServiceSettings};
use chrono::{DateTime, Duration, Utc};

pub const ADMIN_SECRET: &str = "let-me-in";

#[derive(Default)]
pub struct Tables {
    next_id: i64,
    pub accounts: Vec<Account>,
    pub codes: Vec<VerificationCode>,
    pub messages: Vec<Message>,
    pub reactions: Vec<Reaction>,
    pub private_messages: Vec<PrivateMessage>,
    pub photos: Vec<Photo>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    /// Strictly increasing timestamps keep ordering deterministic
    fn tick(&mut self) -> DateTime<Utc> {
        let id = self.next_id();
        Utc::now() + Duration::milliseconds(id)
    }
}

/// Shared in-memory store implementing every repository trait
#[derive(Default)]
pub struct MemoryStore {
    pub tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn with<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> T {
        let mut tables = self.tables.lock().unwrap();
        f(&mut tables)
    }

    pub fn account(&self, id: i64) -> Account {
        self.with(|t| t.accounts.iter().find(|a| a.id == id).cloned().unwrap())
    }

    pub fn set_energy(&self, id: i64, energy: i32) {
        self.with(|t| {
            if let Some(account) = t.accounts.iter_mut().find(|a| a.id == id) {
                account.energy = energy;
            }
        });
    }

    pub fn codes_for(&self, phone: &str) -> Vec<VerificationCode> {
        self.with(|t| t.codes.iter().filter(|c| c.phone == phone).cloned().collect())
    }

    pub fn expire_codes(&self, phone: &str) {
        self.with(|t| {
            for code in t.codes.iter_mut().filter(|c| c.phone == phone) {
                code.expires_at = Utc::now() - Duration::seconds(1);
            }
        });
    }

    pub fn message_count(&self) -> usize {
        self.with(|t| t.messages.len())
    }

    fn first_photo(tables: &Tables, user_id: i64) -> Option<String> {
        let mut photos: Vec<&Photo> = tables.photos.iter().filter(|p| p.user_id == user_id).collect();
        photos.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then(b.created_at.cmp(&a.created_at))
        });
        photos.first().map(|p| p.photo_url.clone())
    }
}

#[async_trait]
impl AccountRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Account>> {
        Ok(self.with(|t| t.accounts.iter().find(|a| a.id == id).cloned()))
    }

    async fn find_by_phone(&self, phone: &str) -> RepoResult<Option<Account>> {
        Ok(self.with(|t| t.accounts.iter().find(|a| a.phone == phone).cloned()))
    }

    async fn create(&self, account: &NewAccount) -> RepoResult<Account> {
        self.with(|t| {
            if t.accounts.iter().any(|a| a.phone == account.phone) {
                return Err(DomainError::AccountAlreadyExists);
            }
            let created = Account {
                id: t.next_id(),
                phone: account.phone.clone(),
                username: account.username.clone(),
                avatar_url: account.avatar_url.clone(),
                energy: INITIAL_ENERGY,
                is_banned: false,
                bio: None,
                last_activity: None,
                created_at: t.tick(),
            };
            t.accounts.push(created.clone());
            Ok(created)
        })
    }

    async fn update_profile(&self, id: i64, update: &ProfileUpdate) -> RepoResult<Option<Account>> {
        Ok(self.with(|t| {
            let account = t.accounts.iter_mut().find(|a| a.id == id)?;
            if let Some(username) = &update.username {
                account.username.clone_from(username);
            }
            if let Some(avatar_url) = &update.avatar_url {
                account.avatar_url = Some(avatar_url.clone());
            }
            if let Some(bio) = &update.bio {
                account.bio = Some(bio.clone());
            }
            Some(account.clone())
        }))
    }

    async fn touch_activity(&self, id: i64) -> RepoResult<()> {
        self.with(|t| {
            if let Some(account) = t.accounts.iter_mut().find(|a| a.id == id) {
                account.last_activity = Some(Utc::now());
            }
        });
        Ok(())
    }

    async fn list_all(&self) -> RepoResult<Vec<Account>> {
        let mut accounts = self.with(|t| t.accounts.clone());
        accounts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(accounts)
    }

    async fn add_energy(&self, id: i64, amount: i32) -> RepoResult<Option<i32>> {
        Ok(self.with(|t| {
            let account = t.accounts.iter_mut().find(|a| a.id == id)?;
            account.energy += amount;
            Some(account.energy)
        }))
    }

    async fn set_banned(&self, id: i64, banned: bool) -> RepoResult<bool> {
        Ok(self.with(|t| match t.accounts.iter_mut().find(|a| a.id == id) {
            Some(account) => {
                account.is_banned = banned;
                true
            }
            None => false,
        }))
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        Ok(self.with(|t| {
            let before = t.accounts.len();
            t.accounts.retain(|a| a.id != id);
            if t.accounts.len() == before {
                return false;
            }
            let removed: Vec<i64> = t
                .messages
                .iter()
                .filter(|m| m.user_id == id)
                .map(|m| m.id)
                .collect();
            t.messages.retain(|m| m.user_id != id);
            t.reactions
                .retain(|r| r.user_id != id && !removed.contains(&r.message_id));
            t.private_messages
                .retain(|m| m.sender_id != id && m.receiver_id != id);
            t.photos.retain(|p| p.user_id != id);
            true
        }))
    }
}

#[async_trait]
impl VerificationCodeRepository for MemoryStore {
    async fn replace(
        &self,
        phone: &str,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<VerificationCode> {
        Ok(self.with(|t| {
            t.codes.retain(|c| c.phone != phone);
            let row = VerificationCode {
                id: t.next_id(),
                phone: phone.to_string(),
                code: code.to_string(),
                expires_at,
                verified: false,
                created_at: t.tick(),
            };
            t.codes.push(row.clone());
            row
        }))
    }

    async fn find_latest(&self, phone: &str) -> RepoResult<Option<VerificationCode>> {
        Ok(self.with(|t| {
            t.codes
                .iter()
                .filter(|c| c.phone == phone)
                .max_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)))
                .cloned()
        }))
    }

    async fn mark_verified(&self, id: i64) -> RepoResult<bool> {
        Ok(self.with(|t| {
            match t.codes.iter_mut().find(|c| c.id == id && !c.verified) {
                Some(code) => {
                    code.verified = true;
                    true
                }
                None => false,
            }
        }))
    }
}

#[async_trait]
impl MessageRepository for MemoryStore {
    async fn post_with_energy(&self, user_id: i64, text: &str, cost: i32) -> RepoResult<PostedMessage> {
        self.with(|t| {
            let account = t
                .accounts
                .iter_mut()
                .find(|a| a.id == user_id)
                .ok_or(DomainError::AccountNotFound(user_id))?;
            if account.is_banned {
                return Err(DomainError::AccountBanned);
            }
            if account.energy < cost {
                return Err(DomainError::NotEnoughEnergy);
            }
            account.energy -= cost;
            account.last_activity = Some(Utc::now());
            let remaining_energy = account.energy;

            let message = Message {
                id: t.next_id(),
                user_id,
                text: text.to_string(),
                created_at: t.tick(),
            };
            t.messages.push(message.clone());
            Ok(PostedMessage {
                message,
                remaining_energy,
            })
        })
    }

    async fn exists(&self, id: i64) -> RepoResult<bool> {
        Ok(self.with(|t| t.messages.iter().any(|m| m.id == id)))
    }

    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<FeedEntry>> {
        Ok(self.with(|t| {
            let mut messages = t.messages.clone();
            messages.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
            messages
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .filter_map(|message| {
                    let account = t.accounts.iter().find(|a| a.id == message.user_id)?;
                    let author = MessageAuthor {
                        id: account.id,
                        username: account.username.clone(),
                        avatar_url: account.avatar_url.clone(),
                        first_photo: Self::first_photo(t, account.id),
                    };
                    Some(FeedEntry { message, author })
                })
                .collect()
        }))
    }
}

#[async_trait]
impl ReactionRepository for MemoryStore {
    async fn toggle(&self, message_id: i64, user_id: i64, emoji: &str) -> RepoResult<ReactionToggle> {
        Ok(self.with(|t| {
            let before = t.reactions.len();
            t.reactions.retain(|r| {
                !(r.message_id == message_id && r.user_id == user_id && r.emoji == emoji)
            });
            if t.reactions.len() < before {
                return ReactionToggle::Removed;
            }
            t.reactions.push(Reaction {
                message_id,
                user_id,
                emoji: emoji.to_string(),
                created_at: Utc::now(),
            });
            ReactionToggle::Added
        }))
    }

    async fn counts_for_messages(&self, message_ids: &[i64]) -> RepoResult<Vec<ReactionCount>> {
        Ok(self.with(|t| {
            let mut counts: BTreeMap<(i64, String), i64> = BTreeMap::new();
            for reaction in t.reactions.iter().filter(|r| message_ids.contains(&r.message_id)) {
                *counts
                    .entry((reaction.message_id, reaction.emoji.clone()))
                    .or_default() += 1;
            }
            counts
                .into_iter()
                .map(|((message_id, emoji), count)| ReactionCount {
                    message_id,
                    emoji,
                    count,
                })
                .collect()
        }))
    }
}

#[async_trait]
impl PrivateMessageRepository for MemoryStore {
    async fn create(&self, sender_id: i64, receiver_id: i64, text: &str) -> RepoResult<PrivateMessage> {
        Ok(self.with(|t| {
            let message = PrivateMessage {
                id: t.next_id(),
                sender_id,
                receiver_id,
                text: text.to_string(),
                is_read: false,
                created_at: t.tick(),
            };
            t.private_messages.push(message.clone());
            message
        }))
    }

    async fn find_conversation(
        &self,
        user_id: i64,
        other_user_id: i64,
        limit: i64,
    ) -> RepoResult<Vec<ConversationMessage>> {
        Ok(self.with(|t| {
            let mut messages: Vec<PrivateMessage> = t
                .private_messages
                .iter()
                .filter(|m| m.involves(user_id) && m.involves(other_user_id))
                .cloned()
                .collect();
            messages.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
            let skip = messages.len().saturating_sub(limit as usize);
            messages
                .into_iter()
                .skip(skip)
                .map(|message| {
                    let sender = t.accounts.iter().find(|a| a.id == message.sender_id);
                    ConversationMessage {
                        sender_username: sender.map(|a| a.username.clone()).unwrap_or_default(),
                        sender_avatar_url: sender.and_then(|a| a.avatar_url.clone()),
                        message,
                    }
                })
                .collect()
        }))
    }

    async fn mark_read(&self, receiver_id: i64, sender_id: i64) -> RepoResult<u64> {
        Ok(self.with(|t| {
            let mut marked = 0;
            for message in t.private_messages.iter_mut().filter(|m| {
                m.receiver_id == receiver_id && m.sender_id == sender_id && !m.is_read
            }) {
                message.is_read = true;
                marked += 1;
            }
            marked
        }))
    }

    async fn list_conversations(&self, user_id: i64) -> RepoResult<Vec<ConversationSummary>> {
        Ok(self.with(|t| {
            let mut latest: BTreeMap<i64, &PrivateMessage> = BTreeMap::new();
            for message in t.private_messages.iter().filter(|m| m.involves(user_id)) {
                let other = if message.sender_id == user_id {
                    message.receiver_id
                } else {
                    message.sender_id
                };
                let entry = latest.entry(other).or_insert(message);
                if message.created_at > entry.created_at {
                    *entry = message;
                }
            }

            let mut summaries: Vec<ConversationSummary> = latest
                .into_iter()
                .filter_map(|(other, last)| {
                    let account = t.accounts.iter().find(|a| a.id == other)?;
                    let unread_count = t
                        .private_messages
                        .iter()
                        .filter(|m| m.sender_id == other && m.receiver_id == user_id && !m.is_read)
                        .count() as i64;
                    Some(ConversationSummary {
                        counterpart_id: other,
                        username: account.username.clone(),
                        avatar_url: account.avatar_url.clone(),
                        last_activity: account.last_activity,
                        last_message: last.text.clone(),
                        last_message_at: last.created_at,
                        unread_count,
                    })
                })
                .collect();
            summaries.sort_by(|a, b| b.last_message_at.cmp(&a.last_message_at));
            summaries
        }))
    }
}

#[async_trait]
impl PhotoRepository for MemoryStore {
    async fn list_for_account(&self, user_id: i64, limit: i64) -> RepoResult<Vec<Photo>> {
        Ok(self.with(|t| {
            let mut photos: Vec<Photo> = t.photos.iter().filter(|p| p.user_id == user_id).cloned().collect();
            photos.sort_by(|a, b| {
                a.display_order
                    .cmp(&b.display_order)
                    .then(b.created_at.cmp(&a.created_at))
            });
            photos.truncate(limit as usize);
            photos
        }))
    }

    async fn create_capped(&self, user_id: i64, photo_url: &str, max: i64) -> RepoResult<Option<Photo>> {
        Ok(self.with(|t| {
            let count = t.photos.iter().filter(|p| p.user_id == user_id).count() as i64;
            if count >= max {
                return None;
            }
            let photo = Photo {
                id: t.next_id(),
                user_id,
                photo_url: photo_url.to_string(),
                display_order: count as i32,
                created_at: t.tick(),
            };
            t.photos.push(photo.clone());
            Some(photo)
        }))
    }

    async fn delete(&self, user_id: i64, photo_id: i64) -> RepoResult<bool> {
        Ok(self.with(|t| {
            let before = t.photos.len();
            t.photos.retain(|p| !(p.id == photo_id && p.user_id == user_id));
            t.photos.len() < before
        }))
    }
}

/// SMS gateway that records messages and can be told to fail
#[derive(Default)]
pub struct RecordingSms {
    pub fail: bool,
    pub sent: Mutex<Vec<(String, String)>>,
}

impl RecordingSms {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl SmsGateway for RecordingSms {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, phone: &str, text: &str) -> GatewayResult<()> {
        if self.fail {
            return Err(GatewayError::Timeout);
        }
        self.sent
            .lock()
            .unwrap()
            .push((phone.to_string(), text.to_string()));
        Ok(())
    }
}

/// Image host returning a fixed URL
#[derive(Default)]
pub struct StubImageHost {
    pub fail: bool,
}

#[async_trait]
impl ImageHost for StubImageHost {
    async fn upload(&self, _image_base64: &str) -> GatewayResult<String> {
        if self.fail {
            return Err(GatewayError::Status {
                status: 400,
                body: "bad image".to_string(),
            });
        }
        Ok("https://i.example.com/abc.png".to_string())
    }
}

/// Object storage recording `(key, content_type, size)`
#[derive(Default)]
pub struct RecordingStorage {
    pub fail: bool,
    pub puts: Mutex<Vec<(String, String, usize)>>,
}

impl RecordingStorage {
    pub fn puts(&self) -> Vec<(String, String, usize)> {
        self.puts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStorage for RecordingStorage {
    async fn put(&self, key: &str, content_type: &str, body: Vec<u8>) -> GatewayResult<String> {
        if self.fail {
            return Err(GatewayError::NotConfigured("Object storage"));
        }
        self.puts
            .lock()
            .unwrap()
            .push((key.to_string(), content_type.to_string(), body.len()));
        Ok(format!("https://storage.example.com/bucket/{key}"))
    }
}

pub struct Harness {
    pub store: Arc<MemoryStore>,
    pub sms: Arc<RecordingSms>,
    pub storage: Arc<RecordingStorage>,
    pub ctx: ServiceContext,
}

pub struct HarnessOptions {
    pub sms: RecordingSms,
    pub image_host: StubImageHost,
    pub storage: RecordingStorage,
    pub admin_secret: Option<String>,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            sms: RecordingSms::default(),
            image_host: StubImageHost::default(),
            storage: RecordingStorage::default(),
            admin_secret: Some(ADMIN_SECRET.to_string()),
        }
    }
}

impl Harness {
    pub fn new() -> Self {
        Self::with_options(HarnessOptions::default())
    }

    pub fn with_options(options: HarnessOptions) -> Self {
        let store = Arc::new(MemoryStore::default());
        let sms = Arc::new(options.sms);
        let storage = Arc::new(options.storage);

        let ctx = ServiceContext::builder()
            .account_repo(store.clone())
            .verification_repo(store.clone())
            .message_repo(store.clone())
            .reaction_repo(store.clone())
            .private_message_repo(store.clone())
            .photo_repo(store.clone())
            .sms_gateway(sms.clone())
            .image_host(Arc::new(options.image_host))
            .object_storage(storage.clone())
            .jwt_service(Arc::new(JwtService::new("test-secret", 900, 604_800, 600)))
            .settings(ServiceSettings {
                admin_secret: options.admin_secret,
                ..ServiceSettings::default()
            })
            .build()
            .unwrap();

        Self {
            store,
            sms,
            storage,
            ctx,
        }
    }

    /// Insert an account directly and return its id
    pub async fn account(&self, phone: &str, username: &str) -> i64 {
        AccountRepository::create(
            self.store.as_ref(),
            &NewAccount {
                phone: phone.to_string(),
                username: username.to_string(),
                avatar_url: None,
            },
        )
        .await
        .unwrap()
        .id
    }
}
