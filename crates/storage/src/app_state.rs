//! Persisted application-state schema
//!
//! The schema deliberately stays small: the visual mode and the signed-in
//! user the shell should restore on the next launch. Anything derivable at
//! runtime (palettes, page caches, dialog state) is rebuilt from scratch.

use serde::{Deserialize, Serialize};

/// Visual mode preference
///
/// The client knows exactly two modes; there is no "system" value and no
/// per-widget override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Bright theme with near-white background
    Light,
    /// Dark theme with navy background (the client's original look)
    #[default]
    Dark,
}

impl ColorMode {
    /// The mode a toggle switches to
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Light => write!(f, "light"),
            ColorMode::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            _ => Err(format!("Unknown color mode: {}", s)),
        }
    }
}

/// The user record remembered across restarts
///
/// Mirrors the fields of the API's user object that the shell actually keeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RememberedUser {
    /// Server-side id, when the server provided one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display name / username
    pub username: String,
    /// Email address, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Application-level persisted state
///
/// Everything that should be restored on the next launch. The current schema
/// version is 1; breaking changes must bump the version in the state-file
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppPersistedState {
    /// Visual mode to restore at startup
    #[serde(default)]
    pub theme: ColorMode,

    /// Signed-in user to restore, if the last session was authenticated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remembered_user: Option<RememberedUser>,
}

impl AppPersistedState {
    /// Create a new state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the persisted visual mode
    pub fn with_theme(mut self, theme: ColorMode) -> Self {
        self.theme = theme;
        self
    }

    /// Set the remembered user
    pub fn with_user(mut self, user: RememberedUser) -> Self {
        self.remembered_user = Some(user);
        self
    }
}
