//! Service context - dependency container for services
//!
//! Holds the repositories, outbound providers, and settings needed by services.

use std::sync::Arc;

use auxchat_common::auth::JwtService;
use auxchat_common::AppConfig;
use auxchat_core::traits::{
    AccountRepository, ImageHost, MessageRepository, ObjectStorage, PhotoRepository,
    PrivateMessageRepository, ReactionRepository, SmsGateway, VerificationCodeRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Runtime knobs the services read on every request
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// Phone number that always receives `test_code`
    pub test_phone: String,
    pub test_code: String,
    /// Shared admin secret; `None` disables the admin panel entirely
    pub admin_secret: Option<String>,
}

impl ServiceSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            test_phone: config.sms.test_phone.clone(),
            test_code: config.sms.test_code.clone(),
            admin_secret: config.admin.secret.clone(),
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            test_phone: "+79999999999".to_string(),
            test_code: "1234".to_string(),
            admin_secret: None,
        }
    }
}

/// Service context containing all dependencies
///
/// Cloning is cheap: every dependency sits behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    account_repo: Arc<dyn AccountRepository>,
    verification_repo: Arc<dyn VerificationCodeRepository>,
    message_repo: Arc<dyn MessageRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    private_message_repo: Arc<dyn PrivateMessageRepository>,
    photo_repo: Arc<dyn PhotoRepository>,

    // Outbound providers
    sms_gateway: Arc<dyn SmsGateway>,
    image_host: Arc<dyn ImageHost>,
    object_storage: Arc<dyn ObjectStorage>,

    jwt_service: Arc<JwtService>,
    settings: ServiceSettings,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    pub fn account_repo(&self) -> &dyn AccountRepository {
        self.account_repo.as_ref()
    }

    pub fn verification_repo(&self) -> &dyn VerificationCodeRepository {
        self.verification_repo.as_ref()
    }

    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    pub fn private_message_repo(&self) -> &dyn PrivateMessageRepository {
        self.private_message_repo.as_ref()
    }

    pub fn photo_repo(&self) -> &dyn PhotoRepository {
        self.photo_repo.as_ref()
    }

    // === Providers ===

    pub fn sms_gateway(&self) -> &dyn SmsGateway {
        self.sms_gateway.as_ref()
    }

    pub fn image_host(&self) -> &dyn ImageHost {
        self.image_host.as_ref()
    }

    pub fn object_storage(&self) -> &dyn ObjectStorage {
        self.object_storage.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("sms_gateway", &self.sms_gateway.name())
            .field("jwt_service", &self.jwt_service)
            .field("test_phone", &self.settings.test_phone)
            .field("admin_enabled", &self.settings.admin_secret.is_some())
            .finish()
    }
}

/// Builder for creating a [`ServiceContext`]
#[derive(Default)]
pub struct ServiceContextBuilder {
    account_repo: Option<Arc<dyn AccountRepository>>,
    verification_repo: Option<Arc<dyn VerificationCodeRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    private_message_repo: Option<Arc<dyn PrivateMessageRepository>>,
    photo_repo: Option<Arc<dyn PhotoRepository>>,
    sms_gateway: Option<Arc<dyn SmsGateway>>,
    image_host: Option<Arc<dyn ImageHost>>,
    object_storage: Option<Arc<dyn ObjectStorage>>,
    jwt_service: Option<Arc<JwtService>>,
    settings: Option<ServiceSettings>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account_repo(mut self, repo: Arc<dyn AccountRepository>) -> Self {
        self.account_repo = Some(repo);
        self
    }

    pub fn verification_repo(mut self, repo: Arc<dyn VerificationCodeRepository>) -> Self {
        self.verification_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn private_message_repo(mut self, repo: Arc<dyn PrivateMessageRepository>) -> Self {
        self.private_message_repo = Some(repo);
        self
    }

    pub fn photo_repo(mut self, repo: Arc<dyn PhotoRepository>) -> Self {
        self.photo_repo = Some(repo);
        self
    }

    pub fn sms_gateway(mut self, gateway: Arc<dyn SmsGateway>) -> Self {
        self.sms_gateway = Some(gateway);
        self
    }

    pub fn image_host(mut self, host: Arc<dyn ImageHost>) -> Self {
        self.image_host = Some(host);
        self
    }

    pub fn object_storage(mut self, storage: Arc<dyn ObjectStorage>) -> Self {
        self.object_storage = Some(storage);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn settings(mut self, settings: ServiceSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            account_repo: required(self.account_repo, "account_repo")?,
            verification_repo: required(self.verification_repo, "verification_repo")?,
            message_repo: required(self.message_repo, "message_repo")?,
            reaction_repo: required(self.reaction_repo, "reaction_repo")?,
            private_message_repo: required(self.private_message_repo, "private_message_repo")?,
            photo_repo: required(self.photo_repo, "photo_repo")?,
            sms_gateway: required(self.sms_gateway, "sms_gateway")?,
            image_host: required(self.image_host, "image_host")?,
            object_storage: required(self.object_storage, "object_storage")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
            settings: self.settings.unwrap_or_default(),
        })
    }
}

fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
    value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
}
