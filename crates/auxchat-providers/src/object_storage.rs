//! Object storage over plain HTTP `PUT`

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::instrument;

use auxchat_common::ObjectStorageConfig;
use auxchat_core::{GatewayError, GatewayResult, ObjectStorage};

use crate::http::{build_client, ensure_success, map_send_error};

/// Stores objects with `PUT {endpoint}/{bucket}/{key}` authenticated by an API key
pub struct HttpObjectStorage {
    http_client: reqwest::Client,
    config: ObjectStorageConfig,
}

impl HttpObjectStorage {
    pub fn new(config: &ObjectStorageConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http_client: build_client(config.timeout_secs)?,
            config: config.clone(),
        })
    }

    fn object_url(&self, key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.bucket,
            key
        )
    }
}

#[async_trait]
impl ObjectStorage for HttpObjectStorage {
    #[instrument(skip(self, body), fields(size = body.len()))]
    async fn put(&self, key: &str, content_type: &str, body: Vec<u8>) -> GatewayResult<String> {
        let access_key = self
            .config
            .access_key
            .as_deref()
            .ok_or(GatewayError::NotConfigured("Object storage"))?;

        let response = self
            .http_client
            .put(self.object_url(key))
            .bearer_auth(access_key)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await
            .map_err(map_send_error)?;

        ensure_success(response).await?;

        Ok(self.config.public_url(key))
    }
}
