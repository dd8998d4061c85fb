//! Modal authentication dialog
//!
//! The dialog is a state machine: `Open` (either tab active, fields
//! editable), a transient `Submitting` while the API call is in flight, and
//! `Closed` with a terminal [`DialogResult`]. Validation failures and API
//! errors never close the dialog; they post a [`Notice`] and return to
//! `Open` so the user can retry. Only a successful submission closes with
//! `Accepted`, and "continue without login" closes with `Rejected` from any
//! state, ignoring whatever is in the fields.
//!
//! The dialog snapshots the opener's theme at construction. Open dialogs are
//! short-lived modals, and the shell is suspended while one is up, so it
//! never observes a mode change mid-flight.

use api_client::{AuthApi, UserRecord};
use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::components::{Button, Role};
use crate::theme::{Theme, Themeable};

/// Which flow the caller wants when opening the dialog
///
/// The mode selects the initially active tab; both tabs stay reachable
/// regardless of how the dialog was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Plain login
    Login,
    /// Registration-first (Get Started)
    Register,
}

/// Terminal outcome of one dialog invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResult {
    /// Authentication succeeded with this user
    Accepted(UserRecord),
    /// The user continued without logging in
    Rejected,
}

/// Dialog state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogPhase {
    /// Fields editable, waiting for a submission or dismissal
    Open,
    /// An API call is in flight; input is locked
    Submitting,
    /// Terminal state
    Closed(DialogResult),
}

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Confirmation
    Info,
    /// Local validation problem
    Warning,
    /// Failure reported by the backend
    Error,
}

/// A blocking message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity of the message
    pub severity: Severity,
    /// Title line
    pub title: String,
    /// Body text
    pub message: String,
}

/// Local validation failures, reported before any network traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Login with an empty username or password
    #[error("Please enter both username and password")]
    MissingCredentials,

    /// Registration with any empty field
    #[error("Please fill in all fields")]
    MissingFields,

    /// Registration password shorter than eight characters
    #[error("Password must be at least 8 characters long")]
    WeakPassword,

    /// Registration email without both '@' and '.'
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl ValidationError {
    /// Notice title for this failure
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::MissingCredentials | ValidationError::MissingFields => {
                "Missing Information"
            }
            ValidationError::WeakPassword => "Weak Password",
            ValidationError::InvalidEmail => "Invalid Email",
        }
    }
}

/// Check login fields before contacting the backend
pub fn validate_login(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}

/// Check registration fields before contacting the backend
///
/// The email check is deliberately minimal: both `@` and `.` must be
/// present. Anything stricter belongs to the backend.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if username.trim().is_empty() || email.trim().is_empty() || password.trim().is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if password.trim().len() < 8 {
        return Err(ValidationError::WeakPassword);
    }
    let email = email.trim();
    if !email.contains('@') || !email.contains('.') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// The modal login/register dialog
#[derive(Debug, Clone)]
pub struct AuthDialog {
    entry_mode: AuthMode,
    active_tab: AuthMode,
    theme: Theme,
    phase: DialogPhase,
    notice: Option<Notice>,

    login_username: String,
    login_password: String,
    register_username: String,
    register_email: String,
    register_password: String,

    /// "LOG IN" button
    pub btn_log_in: Button,
    /// "CREATE ACCOUNT" button
    pub btn_create_account: Button,
    /// "Continue without login (Local Mode)" button
    pub btn_skip: Button,
}

impl AuthDialog {
    /// Open the dialog in the given mode, styled with the opener's theme
    pub fn new(mode: AuthMode, theme: &Theme) -> Self {
        Self {
            entry_mode: mode,
            active_tab: mode,
            theme: theme.clone(),
            phase: DialogPhase::Open,
            notice: None,
            login_username: String::new(),
            login_password: String::new(),
            register_username: String::new(),
            register_email: String::new(),
            register_password: String::new(),
            btn_log_in: Button::new(Role::Submit, "LOG IN", theme),
            btn_create_account: Button::new(Role::Submit, "CREATE ACCOUNT", theme),
            btn_skip: Button::new(Role::Cancel, "Continue without login (Local Mode)", theme),
        }
    }

    /// Mode the dialog was opened in
    pub fn entry_mode(&self) -> AuthMode {
        self.entry_mode
    }

    /// Currently active tab
    pub fn active_tab(&self) -> AuthMode {
        self.active_tab
    }

    /// Switch tabs; both are always reachable while the dialog is open
    pub fn select_tab(&mut self, tab: AuthMode) {
        if self.phase == DialogPhase::Open {
            self.active_tab = tab;
        }
    }

    /// Theme snapshot taken at construction
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Current phase
    pub fn phase(&self) -> &DialogPhase {
        &self.phase
    }

    /// Whether the dialog is still interactive
    pub fn is_open(&self) -> bool {
        self.phase == DialogPhase::Open
    }

    /// Terminal result, once closed
    pub fn result(&self) -> Option<&DialogResult> {
        match &self.phase {
            DialogPhase::Closed(result) => Some(result),
            _ => None,
        }
    }

    /// Latest notice posted to the user
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Fill the login tab's fields
    pub fn enter_login(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.login_username = username.into();
        self.login_password = password.into();
    }

    /// Fill the register tab's fields
    pub fn enter_registration(
        &mut self,
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) {
        self.register_username = username.into();
        self.register_email = email.into();
        self.register_password = password.into();
    }

    /// Submit the active tab
    ///
    /// Validation failures post a warning and leave the dialog open without
    /// touching the API. A backend failure posts the error's message text
    /// and returns to `Open` for retry; success posts a confirmation and
    /// closes with `Accepted`.
    pub async fn submit(&mut self, api: &dyn AuthApi) {
        if self.phase != DialogPhase::Open {
            return;
        }
        match self.active_tab {
            AuthMode::Login => self.submit_login(api).await,
            AuthMode::Register => self.submit_registration(api).await,
        }
    }

    async fn submit_login(&mut self, api: &dyn AuthApi) {
        let username = self.login_username.trim().to_string();
        let password = self.login_password.trim().to_string();

        if let Err(e) = validate_login(&username, &password) {
            self.warn(e);
            return;
        }

        self.phase = DialogPhase::Submitting;
        debug!(%username, "submitting login");

        match api.login(&username, &password).await {
            Ok(user) => {
                self.notice = Some(Notice {
                    severity: Severity::Info,
                    title: "Success".to_string(),
                    message: format!("Welcome back, {}!", username),
                });
                self.phase = DialogPhase::Closed(DialogResult::Accepted(user));
            }
            Err(e) => {
                self.notice = Some(Notice {
                    severity: Severity::Error,
                    title: "Login Failed".to_string(),
                    message: format!("Unable to login:\n\n{}", e),
                });
                self.phase = DialogPhase::Open;
            }
        }
    }

    async fn submit_registration(&mut self, api: &dyn AuthApi) {
        let username = self.register_username.trim().to_string();
        let email = self.register_email.trim().to_string();
        let password = self.register_password.trim().to_string();

        if let Err(e) = validate_registration(&username, &email, &password) {
            self.warn(e);
            return;
        }

        self.phase = DialogPhase::Submitting;
        debug!(%username, "submitting registration");

        match api.register(&username, &email, &password).await {
            Ok(user) => {
                self.notice = Some(Notice {
                    severity: Severity::Info,
                    title: "Success".to_string(),
                    message: format!("Account created successfully!\nWelcome, {}!", username),
                });
                self.phase = DialogPhase::Closed(DialogResult::Accepted(user));
            }
            Err(e) => {
                self.notice = Some(Notice {
                    severity: Severity::Error,
                    title: "Registration Failed".to_string(),
                    message: format!("Unable to create account:\n\n{}", e),
                });
                self.phase = DialogPhase::Open;
            }
        }
    }

    /// Continue without login
    ///
    /// Closes immediately with `Rejected`, skipping validation and network
    /// calls, regardless of partially-entered field values.
    pub fn dismiss(&mut self) {
        if matches!(self.phase, DialogPhase::Closed(_)) {
            return;
        }
        debug!("dialog dismissed without login");
        self.notice = None;
        self.phase = DialogPhase::Closed(DialogResult::Rejected);
    }

    fn warn(&mut self, e: ValidationError) {
        self.notice = Some(Notice {
            severity: Severity::Warning,
            title: e.title().to_string(),
            message: e.to_string(),
        });
    }
}

impl Themeable for AuthDialog {
    fn apply_theme(&mut self, theme: &Theme) {
        self.theme = theme.clone();
        self.btn_log_in.apply_theme(theme);
        self.btn_create_account.apply_theme(theme);
        self.btn_skip.apply_theme(theme);
    }
}

/// Runs a dialog to completion on behalf of the shell
///
/// This is the seam where a rendering toolkit plugs in: the driver owns the
/// interaction loop (filling fields, submitting, dismissing) and returns only
/// once the dialog reaches `Closed`. The shell awaits the driver, so it is
/// suspended — modally — for the whole interaction.
#[async_trait]
pub trait DialogDriver: Send + Sync {
    /// Drive the dialog until it closes and return its terminal result
    async fn run(&self, dialog: &mut AuthDialog, api: &dyn AuthApi) -> DialogResult;
}
