//! HTTP implementation of the authentication API
//!
//! Requests are plain JSON POSTs against the backend's `/api/login/` and
//! `/api/register/` endpoints. Every request carries a timeout so a stalled
//! backend surfaces as [`ApiError::Timeout`] instead of hanging the dialog.

use crate::types::{ApiErrorBody, AuthResponse, LoginRequest, RegisterRequest, UserRecord};
use crate::{ApiError, AuthApi, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for [`HttpApiClient`]
#[derive(Debug, Clone)]
pub struct HttpApiClientConfig {
    /// Backend base URL, e.g. `http://127.0.0.1:8000`
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl HttpApiClientConfig {
    /// Create a configuration with the default timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), timeout: DEFAULT_TIMEOUT }
    }

    /// Set the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Reqwest-backed [`AuthApi`] implementation
pub struct HttpApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpApiClient {
    /// Create a client for the given backend with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(HttpApiClientConfig::new(base_url))
    }

    /// Create a client with custom configuration
    pub fn with_config(config: HttpApiClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    async fn post_auth<B: Serialize>(&self, path: &str, body: &B) -> Result<UserRecord> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "sending auth request");

        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();

        if status.is_success() {
            let parsed: AuthResponse = serde_json::from_slice(&response.bytes().await?)?;
            Ok(parsed.user)
        } else {
            let body: ApiErrorBody = response.json().await.unwrap_or_default();
            let message = body.message_or_status(status.as_u16());
            warn!(%url, status = status.as_u16(), %message, "auth request rejected");
            Err(ApiError::Api { status: status.as_u16(), message })
        }
    }
}

#[async_trait]
impl AuthApi for HttpApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<UserRecord> {
        self.post_auth("/api/login/", &LoginRequest { username, password })
            .await
    }

    async fn register(&self, username: &str, email: &str, password: &str) -> Result<UserRecord> {
        self.post_auth(
            "/api/register/",
            &RegisterRequest { username, email, password },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> HttpApiClient {
        HttpApiClient::new(server.uri()).unwrap()
    }

    #[tokio::test]
    async fn test_login_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login/"))
            .and(body_partial_json(serde_json::json!({
                "username": "alice",
                "password": "secret",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "user": { "id": 1, "username": "alice", "email": "alice@example.com" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let user = client.login("alice", "secret").await.unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.id, Some(1));
    }

    #[tokio::test]
    async fn test_login_invalid_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login/"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": "Invalid username or password"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.login("alice", "wrong").await.unwrap_err();
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid username or password");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/register/"))
            .and(body_partial_json(serde_json::json!({
                "username": "bob",
                "email": "bob@example.com",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "user": { "id": 2, "username": "bob" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let user = client
            .register("bob", "bob@example.com", "password1")
            .await
            .unwrap();
        assert_eq!(user.username, "bob");
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/register/"))
            .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
                "detail": "Username already taken"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client
            .register("taken", "a@b.c", "password1")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Username already taken");
    }

    #[tokio::test]
    async fn test_timeout_surfaces_as_timed_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "user": { "username": "alice" } }))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let config =
            HttpApiClientConfig::new(server.uri()).timeout(Duration::from_millis(50));
        let client = HttpApiClient::with_config(config).unwrap();

        let err = client.login("alice", "secret").await.unwrap_err();
        assert!(matches!(err, ApiError::Timeout));
        assert_eq!(err.to_string(), "request timed out");
    }

    #[tokio::test]
    async fn test_error_without_body_uses_status_line() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.login("alice", "secret").await.unwrap_err();
        assert_eq!(err.to_string(), "request failed with status 500");
    }
}
