//! Request and response types for the ChemFlow authentication API

use serde::{Deserialize, Serialize};

/// A user record returned by the backend
///
/// The shell treats this as opaque apart from the username it shows in
/// greetings; extra fields the server sends are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Server-side id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Username / display name
    pub username: String,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserRecord {
    /// Create a record with only a username
    pub fn named(username: impl Into<String>) -> Self {
        Self { id: None, username: username.into(), email: None }
    }
}

/// Login request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Register request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Successful authentication response: `{ "user": { ... } }`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AuthResponse {
    pub user: UserRecord,
}

/// Error body the backend returns on failed requests
///
/// The backend is not consistent about the field name, so all the shapes seen
/// in the wild are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Best available message, falling back to the HTTP status line
    pub fn message_or_status(&self, status: u16) -> String {
        self.error
            .clone()
            .or_else(|| self.detail.clone())
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| format!("request failed with status {}", status))
    }
}
