//! Session state
//!
//! A session is either anonymous (local mode) or carries the user record the
//! API returned at login. The shell is the only writer; pages read through
//! the context and never mutate.

use api_client::UserRecord;

/// The authenticated-or-anonymous user state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    user: Option<UserRecord>,
}

impl Session {
    /// An anonymous session (local mode)
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session for an already-authenticated user (restored from disk)
    pub fn authenticated(user: UserRecord) -> Self {
        Self { user: Some(user) }
    }

    /// Whether the client is running in local mode
    pub fn is_anonymous(&self) -> bool {
        self.user.is_none()
    }

    /// The signed-in user, if any
    pub fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }

    /// Record a successful authentication
    ///
    /// Called once per successful login or registration; a later login event
    /// (after logout) simply establishes the new user.
    pub(crate) fn establish(&mut self, user: UserRecord) {
        self.user = Some(user);
    }

    /// Drop back to local mode
    pub(crate) fn clear(&mut self) {
        self.user = None;
    }
}
