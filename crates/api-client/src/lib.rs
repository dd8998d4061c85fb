//! ChemFlow API client
//!
//! This crate provides the client for the ChemFlow analytics backend's
//! authentication endpoints. The shell and the auth dialog only ever talk to
//! the [`AuthApi`] trait, so tests can substitute a mock and assert on call
//! counts.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod types;

pub use client::{HttpApiClient, HttpApiClientConfig};
pub use types::UserRecord;

use async_trait::async_trait;

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Error types for API operations
///
/// The shell does not branch on these variants beyond rendering the message
/// text to the user, so `Display` on every variant is a full, user-facing
/// sentence.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request did not complete within the configured timeout
    #[error("request timed out")]
    Timeout,

    /// Network-level failure (connection refused, DNS, TLS, ...)
    #[error("network error: {0}")]
    Network(String),

    /// The server rejected the request
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the server
        message: String,
    },

    /// Response body could not be decoded
    #[error("invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// Authentication operations exposed by the ChemFlow backend
///
/// Both operations return the authenticated user on success; any failure
/// carries a message suitable for direct display.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Log in with an existing account
    async fn login(&self, username: &str, password: &str) -> Result<UserRecord>;

    /// Register a new account and log it in
    async fn register(&self, username: &str, email: &str, password: &str) -> Result<UserRecord>;
}
