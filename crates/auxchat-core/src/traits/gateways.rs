//! Outbound provider ports - SMS delivery, image hosting, blob storage

use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by outbound providers
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    #[error("Request timed out")]
    Timeout,

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Provider rejected request: {0}")]
    Rejected(String),

    #[error("Unexpected provider response: {0}")]
    InvalidResponse(String),
}

/// Result type for provider calls
pub type GatewayResult<T> = Result<T, GatewayError>;

#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Provider name for logs
    fn name(&self) -> &'static str;

    /// Send a text message to a phone number
    async fn send(&self, phone: &str, text: &str) -> GatewayResult<()>;
}

#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Upload a base64 encoded image and return its public URL
    async fn upload(&self, image_base64: &str) -> GatewayResult<String>;
}

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store an object under `key` and return its public URL
    async fn put(&self, key: &str, content_type: &str, body: Vec<u8>) -> GatewayResult<String>;
}
