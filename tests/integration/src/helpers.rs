//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests,
//! reading issued codes and signing up fresh accounts.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use auxchat_api::{create_app, create_app_state};
use auxchat_common::AppConfig;
use auxchat_db::PgPool;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{unique_phone, AuthResponse, RegisterRequest, SmsRequest, VerifyResponse};

/// Admin secret every test server is configured with
pub const TEST_ADMIN_SECRET: &str = "integration-admin-secret";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub pool: PgPool,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let pool = state.pool().clone();
        let app = create_app(state);

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            pool,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Start a request for any method
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, format!("{}{}", self.base_url(), path))
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.request(Method::GET, path).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self.request(Method::GET, path).bearer_auth(token).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.request(Method::POST, path).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .request(Method::POST, path)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a PATCH request with auth token
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .request(Method::PATCH, path)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .request(Method::DELETE, path)
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Latest code issued for a phone, read straight from the database
    pub async fn latest_code(&self, phone: &str) -> Result<String> {
        let code = sqlx::query_scalar::<_, String>(
            "SELECT code FROM sms_codes WHERE phone = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(phone)
        .fetch_one(&self.pool)
        .await?;
        Ok(code)
    }

    /// Request a code for `phone` and verify it
    pub async fn verify_phone(&self, phone: &str) -> Result<VerifyResponse> {
        let response = self.post("/api/v1/auth/sms/send", &SmsRequest::send(phone)).await?;
        assert_status(response, StatusCode::OK).await?;

        let code = self.latest_code(phone).await?;
        let response = self
            .post("/api/v1/auth/sms/verify", &SmsRequest::verify(phone, &code))
            .await?;
        assert_json(response, StatusCode::OK).await
    }

    /// Sign up a brand new account through the SMS flow
    pub async fn sign_up(&self) -> Result<AuthResponse> {
        let verified = self.verify_phone(&unique_phone()).await?;
        let response = self
            .post(
                "/api/v1/auth/register",
                &RegisterRequest::unique(&verified.phone_token),
            )
            .await?;
        assert_json(response, StatusCode::CREATED).await
    }
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    if std::env::var("API_PORT").is_err() {
        std::env::set_var("API_PORT", "0");
    }

    let mut config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;
    config.admin.secret = Some(TEST_ADMIN_SECRET.to_string());
    config.sms.api_key = None;
    config.rate_limit.requests_per_second = 1000;
    config.rate_limit.burst = 1000;

    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    for var in ["DATABASE_URL", "JWT_SECRET"] {
        if std::env::var(var).is_err() {
            eprintln!("Skipping test: {var} not set");
            return false;
        }
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
