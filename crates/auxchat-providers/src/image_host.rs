//! Image hosting via the imgbb upload API

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use auxchat_common::ImageHostConfig;
use auxchat_core::{GatewayError, GatewayResult, ImageHost};

use crate::http::{build_client, ensure_success, map_send_error};

/// Client for `POST {base}/1/upload?key=...` with a form field `image`
pub struct ImgbbImageHost {
    http_client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    data: UploadedImage,
}

#[derive(Debug, Deserialize)]
struct UploadedImage {
    url: String,
}

impl ImgbbImageHost {
    pub fn new(config: &ImageHostConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http_client: build_client(config.timeout_secs)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

fn parse_upload_response(body: &str) -> GatewayResult<String> {
    serde_json::from_str::<UploadResponse>(body)
        .map(|response| response.data.url)
        .map_err(|e| GatewayError::InvalidResponse(format!("failed to parse upload response: {e}")))
}

#[async_trait]
impl ImageHost for ImgbbImageHost {
    #[instrument(skip(self, image_base64), fields(size = image_base64.len()))]
    async fn upload(&self, image_base64: &str) -> GatewayResult<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GatewayError::NotConfigured("Image host"))?;

        let url = format!("{}/1/upload", self.base_url);
        let response = self
            .http_client
            .post(&url)
            .query(&[("key", api_key)])
            .form(&[("image", image_base64)])
            .send()
            .await
            .map_err(map_send_error)?;

        let body = ensure_success(response)
            .await?
            .text()
            .await
            .map_err(map_send_error)?;

        parse_upload_response(&body)
    }
}
