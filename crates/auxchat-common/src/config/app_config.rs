//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub sms: SmsConfig,
    pub image_host: ImageHostConfig,
    pub object_storage: ObjectStorageConfig,
    pub admin: AdminConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// JWT configuration (expiries in seconds)
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64,
    #[serde(default = "default_refresh_token_expiry")]
    pub refresh_token_expiry: i64,
    #[serde(default = "default_phone_token_expiry")]
    pub phone_token_expiry: i64,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration; an empty list allows any origin
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// SMS gateway configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SmsConfig {
    /// Gateway API key; codes are only logged when unset
    pub api_key: Option<String>,
    #[serde(default = "default_sms_base_url")]
    pub base_url: String,
    /// Phone number that always receives `test_code`
    #[serde(default = "default_test_phone")]
    pub test_phone: String,
    #[serde(default = "default_test_code")]
    pub test_code: String,
    #[serde(default = "default_sms_timeout")]
    pub timeout_secs: u64,
}

/// Image hosting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ImageHostConfig {
    pub api_key: Option<String>,
    #[serde(default = "default_image_host_base_url")]
    pub base_url: String,
    #[serde(default = "default_upload_timeout")]
    pub timeout_secs: u64,
}

/// Object storage configuration for voice messages
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectStorageConfig {
    #[serde(default = "default_storage_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_bucket")]
    pub bucket: String,
    pub access_key: Option<String>,
    /// Base of public object URLs; defaults to the endpoint
    pub public_base_url: Option<String>,
    #[serde(default = "default_upload_timeout")]
    pub timeout_secs: u64,
}

impl ObjectStorageConfig {
    /// Public URL for an object key
    #[must_use]
    pub fn public_url(&self, key: &str) -> String {
        let base = self.public_base_url.as_deref().unwrap_or(&self.endpoint);
        format!("{}/{}/{}", base.trim_end_matches('/'), self.bucket, key)
    }
}

/// Admin panel configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Shared secret; the admin panel is disabled when unset
    pub secret: Option<String>,
}

// Default value functions
fn default_app_name() -> String {
    "auxchat".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_access_token_expiry() -> i64 {
    900 // 15 minutes
}

fn default_refresh_token_expiry() -> i64 {
    604_800 // 7 days
}

fn default_phone_token_expiry() -> i64 {
    600 // 10 minutes
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_sms_base_url() -> String {
    "https://sms.ru".to_string()
}

fn default_test_phone() -> String {
    "+79999999999".to_string()
}

fn default_test_code() -> String {
    "1234".to_string()
}

fn default_sms_timeout() -> u64 {
    10
}

fn default_image_host_base_url() -> String {
    "https://api.imgbb.com".to_string()
}

fn default_storage_endpoint() -> String {
    "https://storage.yandexcloud.net".to_string()
}

fn default_bucket() -> String {
    "auxchat-uploads".to_string()
}

fn default_upload_timeout() -> u64 {
    30
}

/// Read a variable, treating an empty value as unset
fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse an optional variable, rejecting values that do not parse
fn parse_var<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    var(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key, raw))
        })
        .transpose()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env: var("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: var("API_HOST").unwrap_or_else(default_host),
                port: parse_var("API_PORT")?.ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                url: var("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
                min_connections: parse_var("DATABASE_MIN_CONNECTIONS")?
                    .unwrap_or_else(default_min_connections),
            },
            jwt: JwtConfig {
                secret: var("JWT_SECRET").ok_or(ConfigError::MissingVar("JWT_SECRET"))?,
                access_token_expiry: parse_var("JWT_ACCESS_TOKEN_EXPIRY")?
                    .unwrap_or_else(default_access_token_expiry),
                refresh_token_expiry: parse_var("JWT_REFRESH_TOKEN_EXPIRY")?
                    .unwrap_or_else(default_refresh_token_expiry),
                phone_token_expiry: parse_var("JWT_PHONE_TOKEN_EXPIRY")?
                    .unwrap_or_else(default_phone_token_expiry),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parse_var("RATE_LIMIT_REQUESTS_PER_SECOND")?
                    .unwrap_or_else(default_requests_per_second),
                burst: parse_var("RATE_LIMIT_BURST")?.unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: var("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|origin| !origin.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            sms: SmsConfig {
                api_key: var("SMSRU_API_KEY"),
                base_url: var("SMS_BASE_URL").unwrap_or_else(default_sms_base_url),
                test_phone: var("SMS_TEST_PHONE").unwrap_or_else(default_test_phone),
                test_code: var("SMS_TEST_CODE").unwrap_or_else(default_test_code),
                timeout_secs: parse_var("SMS_TIMEOUT_SECS")?.unwrap_or_else(default_sms_timeout),
            },
            image_host: ImageHostConfig {
                api_key: var("IMGBB_API_KEY"),
                base_url: var("IMGBB_BASE_URL").unwrap_or_else(default_image_host_base_url),
                timeout_secs: parse_var("IMGBB_TIMEOUT_SECS")?
                    .unwrap_or_else(default_upload_timeout),
            },
            object_storage: ObjectStorageConfig {
                endpoint: var("S3_ENDPOINT").unwrap_or_else(default_storage_endpoint),
                bucket: var("S3_BUCKET_NAME").unwrap_or_else(default_bucket),
                access_key: var("S3_ACCESS_KEY_ID"),
                public_base_url: var("S3_PUBLIC_BASE_URL"),
                timeout_secs: parse_var("S3_TIMEOUT_SECS")?.unwrap_or_else(default_upload_timeout),
            },
            admin: AdminConfig {
                secret: var("ADMIN_SECRET"),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
