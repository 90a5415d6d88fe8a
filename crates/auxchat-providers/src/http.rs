//! Shared HTTP client helpers

use std::time::Duration;

use auxchat_core::GatewayError;
use reqwest::Response;

/// Connection timeout applied to every provider
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Longest provider error body kept in error messages
const MAX_ERROR_BODY: usize = 512;

/// Build a client with the given request timeout
pub(crate) fn build_client(timeout_secs: u64) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
}

/// Classify a transport failure
pub(crate) fn map_send_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::Connection(e.to_string())
    } else {
        GatewayError::InvalidResponse(e.to_string())
    }
}

/// Turn a non-2xx response into `GatewayError::Status`
pub(crate) async fn ensure_success(response: Response) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let mut body = response.text().await.unwrap_or_default();
    if body.len() > MAX_ERROR_BODY {
        let mut end = MAX_ERROR_BODY;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body.truncate(end);
    }

    Err(GatewayError::Status {
        status: status.as_u16(),
        body,
    })
}
