//! Application context
//!
//! The context is the single owner of session and visual-mode state. It is
//! constructed once per process (or per test) and handed to the shell, which
//! exposes narrow mutators; no other component writes through it. When built
//! with a state file, every mutation is persisted; persistence failures are
//! logged and never fatal.

use api_client::UserRecord;
use storage::{AppPersistedState, ColorMode, RememberedUser, StateFile, StorageError};
use tracing::{info, warn};

use crate::session::Session;

/// Cross-component application state owned by the shell
pub struct AppContext {
    session: Session,
    color_mode: ColorMode,
    store: Option<StateFile<AppPersistedState>>,
}

impl AppContext {
    /// Create an in-memory context with default state
    ///
    /// Nothing is persisted; used by tests and by runs without a writable
    /// state location.
    pub fn new() -> Self {
        Self {
            session: Session::anonymous(),
            color_mode: ColorMode::default(),
            store: None,
        }
    }

    /// Restore a context from a state file
    ///
    /// A missing file yields defaults. Corruption and version mismatches are
    /// surfaced to the caller, which may choose to start fresh.
    pub async fn restore(store: StateFile<AppPersistedState>) -> Result<Self, StorageError> {
        let persisted = store.load().await?;

        let session = match persisted.remembered_user {
            Some(user) => {
                info!(username = %user.username, "restored session");
                Session::authenticated(UserRecord {
                    id: user.id,
                    username: user.username,
                    email: user.email,
                })
            }
            None => Session::anonymous(),
        };

        Ok(Self {
            session,
            color_mode: persisted.theme,
            store: Some(store),
        })
    }

    /// Current visual mode
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Set the visual mode
    pub async fn set_color_mode(&mut self, mode: ColorMode) {
        self.color_mode = mode;
        self.persist().await;
    }

    /// Current session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Record a successful authentication
    pub async fn establish_session(&mut self, user: UserRecord) {
        info!(username = %user.username, "session established");
        self.session.establish(user);
        self.persist().await;
    }

    /// Drop back to local mode (explicit logout)
    pub async fn clear_session(&mut self) {
        info!("session cleared");
        self.session.clear();
        self.persist().await;
    }

    fn persisted_state(&self) -> AppPersistedState {
        AppPersistedState {
            theme: self.color_mode,
            remembered_user: self.session.user().map(|user| RememberedUser {
                id: user.id,
                username: user.username.clone(),
                email: user.email.clone(),
            }),
        }
    }

    async fn persist(&self) {
        if let Some(store) = &self.store {
            if let Err(e) = store.save(&self.persisted_state()).await {
                warn!(error = %e, "failed to persist application state");
            }
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
