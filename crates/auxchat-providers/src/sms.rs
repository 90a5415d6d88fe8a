//! SMS gateways

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, instrument};

use auxchat_core::{GatewayError, GatewayResult, SmsGateway};

use crate::http::{build_client, ensure_success, map_send_error};

/// SMS.RU status code for an accepted request
const SMS_RU_OK: i64 = 100;

/// Client for the SMS.RU HTTP API (`GET /sms/send`)
pub struct SmsRuGateway {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Top-level SMS.RU response; `status` is "OK" or "ERROR"
#[derive(Debug, Deserialize)]
struct SmsRuResponse {
    status: String,
    #[serde(default)]
    status_code: Option<i64>,
    #[serde(default)]
    status_text: Option<String>,
}

impl SmsRuGateway {
    pub fn new(base_url: &str, api_key: &str, timeout_secs: u64) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http_client: build_client(timeout_secs)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }
}

impl std::fmt::Debug for SmsRuGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsRuGateway")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Interpret an SMS.RU JSON body
fn parse_sms_ru_response(body: &str) -> GatewayResult<()> {
    let response: SmsRuResponse = serde_json::from_str(body)
        .map_err(|e| GatewayError::InvalidResponse(format!("failed to parse SMS.RU response: {e}")))?;

    if response.status == "OK" || response.status_code == Some(SMS_RU_OK) {
        return Ok(());
    }

    Err(GatewayError::Rejected(
        response
            .status_text
            .unwrap_or_else(|| format!("status {}", response.status)),
    ))
}

#[async_trait]
impl SmsGateway for SmsRuGateway {
    fn name(&self) -> &'static str {
        "sms.ru"
    }

    #[instrument(skip(self, text))]
    async fn send(&self, phone: &str, text: &str) -> GatewayResult<()> {
        let url = format!("{}/sms/send", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_id", self.api_key.as_str()),
                ("to", phone),
                ("msg", text),
                ("json", "1"),
            ])
            .send()
            .await
            .map_err(map_send_error)?;

        let body = ensure_success(response)
            .await?
            .text()
            .await
            .map_err(map_send_error)?;

        parse_sms_ru_response(&body)
    }
}

/// Development gateway: logs the message instead of sending it
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSmsGateway;

#[async_trait]
impl SmsGateway for LogSmsGateway {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn send(&self, phone: &str, text: &str) -> GatewayResult<()> {
        info!(phone = %phone, text = %text, "SMS (not sent, no gateway configured)");
        Ok(())
    }
}
