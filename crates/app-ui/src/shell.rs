//! The application shell
//!
//! The shell is the top-level controller: it is the sole mutator of session
//! and theme, the sole owner of which page is active, and the only component
//! that opens the auth dialog. Everything else requests work from it through
//! [`PageAction`]s.
//!
//! All transitions happen on one task. While a dialog is up the shell is
//! suspended awaiting the driver, so no navigation or theme change can
//! interleave with a modal interaction.

use std::sync::Arc;

use api_client::AuthApi;
use app_state::{AppContext, Session};
use tracing::info;

use crate::dialog::{AuthDialog, AuthMode, DialogDriver, DialogResult};
use crate::pages::{DashboardPage, IndexPage, Page, PageAction, PageId};
use crate::theme::{ColorMode, Theme, ThemeState, Themeable};

/// Constructed pages, kept across navigations
///
/// A page constructed once is remounted without reconstruction; the shell
/// re-applies the active theme on every remount since the mode may have
/// changed while the page was detached.
#[derive(Default)]
struct PageRegistry {
    index: Option<IndexPage>,
    dashboard: Option<DashboardPage>,
}

impl PageRegistry {
    fn get_mut(&mut self, id: PageId) -> Option<&mut dyn Page> {
        match id {
            PageId::Index => self.index.as_mut().map(|p| p as &mut dyn Page),
            PageId::Dashboard => self.dashboard.as_mut().map(|p| p as &mut dyn Page),
        }
    }

    fn iter_mut<'a>(&'a mut self) -> impl Iterator<Item = &'a mut dyn Page> + 'a {
        self.index
            .iter_mut()
            .map(|p| p as &mut dyn Page)
            .chain(self.dashboard.iter_mut().map(|p| p as &mut dyn Page))
    }

    fn ensure(&mut self, id: PageId, theme: &Theme) {
        match id {
            PageId::Index => {
                if self.index.is_none() {
                    self.index = Some(IndexPage::new(theme));
                }
            }
            PageId::Dashboard => {
                if self.dashboard.is_none() {
                    self.dashboard = Some(DashboardPage::new(theme));
                }
            }
        }
    }
}

/// Top-level window controller owning navigation, session, and theme
pub struct Shell {
    ctx: AppContext,
    theme: ThemeState,
    api: Arc<dyn AuthApi>,
    driver: Box<dyn DialogDriver>,
    pages: PageRegistry,
    active: PageId,
}

impl Shell {
    /// Construct the shell with the landing page mounted
    pub fn new(ctx: AppContext, api: Arc<dyn AuthApi>, driver: Box<dyn DialogDriver>) -> Self {
        let theme = ThemeState::new(ctx.color_mode());
        let mut pages = PageRegistry::default();
        pages.ensure(PageId::Index, theme.current_theme());

        let mut shell = Self {
            ctx,
            theme,
            api,
            driver,
            pages,
            active: PageId::Index,
        };
        if let Some(page) = shell.pages.get_mut(PageId::Index) {
            page.set_mounted(true);
        }
        info!(theme = %shell.theme.mode(), "shell ready");
        shell
    }

    /// Identity of the active page
    pub fn active_page(&self) -> PageId {
        self.active
    }

    /// Current visual mode
    pub fn theme_mode(&self) -> ColorMode {
        self.theme.mode()
    }

    /// Current resolved theme
    pub fn current_theme(&self) -> &Theme {
        self.theme.current_theme()
    }

    /// Current session
    pub fn session(&self) -> &Session {
        self.ctx.session()
    }

    /// The landing page, once constructed
    pub fn index_page(&self) -> Option<&IndexPage> {
        self.pages.index.as_ref()
    }

    /// The dashboard page, once constructed
    pub fn dashboard_page(&self) -> Option<&DashboardPage> {
        self.pages.dashboard.as_ref()
    }

    /// Route a page action
    ///
    /// This is the single subscription point for every page's action surface.
    pub async fn dispatch(&mut self, action: PageAction) {
        match action {
            PageAction::LoginRequested => self.show_login().await,
            PageAction::RegisterRequested => self.show_register().await,
            PageAction::DashboardRequested => self.show_dashboard_page(),
            PageAction::IndexRequested => self.show_index_page(),
            PageAction::ThemeToggleRequested => self.toggle_theme().await,
        }
    }

    /// Open the auth dialog on the login tab
    ///
    /// Suspends until the dialog closes. `Accepted` establishes the session
    /// and proceeds to the dashboard; `Rejected` changes nothing and control
    /// returns to whatever page was active.
    pub async fn show_login(&mut self) {
        self.run_auth_dialog(AuthMode::Login).await;
    }

    /// Open the auth dialog on the register tab
    pub async fn show_register(&mut self) {
        self.run_auth_dialog(AuthMode::Register).await;
    }

    async fn run_auth_dialog(&mut self, mode: AuthMode) {
        info!(mode = ?mode, "opening auth dialog");
        let mut dialog = AuthDialog::new(mode, self.theme.current_theme());
        let result = self.driver.run(&mut dialog, &*self.api).await;

        match result {
            DialogResult::Accepted(user) => {
                self.ctx.establish_session(user).await;
                self.navigate(PageId::Dashboard);
            }
            DialogResult::Rejected => {
                // Documented no-op for the session; the active page stays
                info!(page = %self.active, "continuing without login");
            }
        }
    }

    /// Navigate to the dashboard
    ///
    /// Never gated on authentication: local mode is a supported way to use
    /// the dashboard.
    pub fn show_dashboard_page(&mut self) {
        self.navigate(PageId::Dashboard);
    }

    /// Navigate to the landing page
    pub fn show_index_page(&mut self) {
        self.navigate(PageId::Index);
    }

    /// Flip light/dark and restyle everything mounted in the same step
    pub async fn toggle_theme(&mut self) {
        let mode = self.theme.toggle();
        self.ctx.set_color_mode(mode).await;

        let theme = self.theme.current_theme().clone();
        for page in self.pages.iter_mut() {
            if page.is_mounted() {
                page.apply_theme(&theme);
            }
        }
        info!(theme = %mode, "theme toggled");
    }

    /// Explicit logout, dropping back to local mode
    pub async fn log_out(&mut self) {
        self.ctx.clear_session().await;
        if let Some(dashboard) = self.pages.dashboard.as_mut() {
            dashboard.set_viewer(None);
        }
    }

    fn navigate(&mut self, target: PageId) {
        let from = self.active;

        // The old page is fully detached before the new one is attached
        if let Some(page) = self.pages.get_mut(from) {
            page.set_mounted(false);
        }

        let theme = self.theme.current_theme().clone();
        self.pages.ensure(target, &theme);

        if target == PageId::Dashboard {
            let username = self
                .ctx
                .session()
                .user()
                .map(|user| user.username.clone());
            if let Some(dashboard) = self.pages.dashboard.as_mut() {
                dashboard.set_viewer(username.as_deref());
            }
        }

        if let Some(page) = self.pages.get_mut(target) {
            page.apply_theme(&theme);
            page.set_mounted(true);
        }
        self.active = target;
        info!(%from, to = %target, "navigated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_client::{ApiError, MockAuthApi, UserRecord};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// What a scripted driver does with the next dialog it is handed
    enum Script {
        Cancel,
        LoginAs(&'static str, &'static str),
        RegisterAs(&'static str, &'static str, &'static str),
        SubmitLoginThenCancel(&'static str, &'static str),
    }

    struct ScriptedDriver {
        scripts: Mutex<VecDeque<Script>>,
    }

    impl ScriptedDriver {
        fn with(scripts: Vec<Script>) -> Box<Self> {
            Box::new(Self { scripts: Mutex::new(scripts.into()) })
        }
    }

    #[async_trait]
    impl DialogDriver for ScriptedDriver {
        async fn run(&self, dialog: &mut AuthDialog, api: &dyn AuthApi) -> DialogResult {
            let script = self
                .scripts
                .lock()
                .unwrap()
                .pop_front()
                .expect("dialog opened with no script queued");

            match script {
                Script::Cancel => dialog.dismiss(),
                Script::LoginAs(username, password) => {
                    dialog.enter_login(username, password);
                    dialog.submit(api).await;
                    if dialog.is_open() {
                        dialog.dismiss();
                    }
                }
                Script::RegisterAs(username, email, password) => {
                    dialog.select_tab(AuthMode::Register);
                    dialog.enter_registration(username, email, password);
                    dialog.submit(api).await;
                    if dialog.is_open() {
                        dialog.dismiss();
                    }
                }
                Script::SubmitLoginThenCancel(username, password) => {
                    dialog.enter_login(username, password);
                    dialog.submit(api).await;
                    dialog.dismiss();
                }
            }

            dialog.result().cloned().expect("script left dialog open")
        }
    }

    fn shell_with(api: MockAuthApi, scripts: Vec<Script>) -> Shell {
        Shell::new(AppContext::new(), Arc::new(api), ScriptedDriver::with(scripts))
    }

    #[tokio::test]
    async fn test_startup_mounts_index() {
        let shell = shell_with(MockAuthApi::new(), vec![]);
        assert_eq!(shell.active_page(), PageId::Index);
        assert_eq!(shell.theme_mode(), ColorMode::Dark);
        assert!(shell.index_page().unwrap().is_mounted());
        assert!(shell.dashboard_page().is_none());
        assert!(shell.session().is_anonymous());
    }

    #[tokio::test]
    async fn test_toggle_keeps_mounted_page_in_sync() {
        let mut shell = shell_with(MockAuthApi::new(), vec![]);

        for _ in 0..5 {
            shell.toggle_theme().await;
            let page = shell.index_page().unwrap();
            assert_eq!(page.theme_mode(), shell.theme_mode());
        }
        // Odd number of toggles from dark
        assert_eq!(shell.theme_mode(), ColorMode::Light);
    }

    #[tokio::test]
    async fn test_detached_page_restyled_on_remount() {
        let mut shell = shell_with(MockAuthApi::new(), vec![]);

        shell.show_dashboard_page();
        assert!(!shell.index_page().unwrap().is_mounted());

        // Index is detached while the theme changes
        shell.toggle_theme().await;
        assert_eq!(shell.index_page().unwrap().theme_mode(), ColorMode::Dark);

        // Remounting re-applies the current theme
        shell.show_index_page();
        assert_eq!(shell.index_page().unwrap().theme_mode(), ColorMode::Light);
        assert!(shell.index_page().unwrap().is_mounted());
    }

    #[tokio::test]
    async fn test_navigation_detaches_before_attaching() {
        let mut shell = shell_with(MockAuthApi::new(), vec![]);

        shell.show_dashboard_page();
        assert_eq!(shell.active_page(), PageId::Dashboard);
        assert!(shell.dashboard_page().unwrap().is_mounted());
        assert!(!shell.index_page().unwrap().is_mounted());

        shell.show_index_page();
        assert_eq!(shell.active_page(), PageId::Index);
        assert!(!shell.dashboard_page().unwrap().is_mounted());
        assert!(shell.index_page().unwrap().is_mounted());
    }

    #[tokio::test]
    async fn test_dashboard_open_to_anonymous_sessions() {
        let mut shell = shell_with(MockAuthApi::new(), vec![]);

        shell.show_dashboard_page();
        assert_eq!(shell.active_page(), PageId::Dashboard);
        assert!(shell.session().is_anonymous());
        assert_eq!(shell.dashboard_page().unwrap().viewer.text, "Local mode");
    }

    #[tokio::test]
    async fn test_accepted_login_sets_session_and_navigates() {
        let mut api = MockAuthApi::new();
        api.expect_login()
            .withf(|u, p| u == "alice" && p == "secret")
            .times(1)
            .returning(|u, _| Ok(UserRecord::named(u)));

        let mut shell = shell_with(api, vec![Script::LoginAs("alice", "secret")]);
        shell.dispatch(PageAction::LoginRequested).await;

        assert_eq!(shell.session().user().unwrap().username, "alice");
        assert_eq!(shell.active_page(), PageId::Dashboard);
        assert_eq!(
            shell.dashboard_page().unwrap().viewer.text,
            "Signed in as alice"
        );
    }

    #[tokio::test]
    async fn test_rejected_dialog_changes_nothing() {
        let mut shell = shell_with(MockAuthApi::new(), vec![Script::Cancel]);
        shell.dispatch(PageAction::RegisterRequested).await;

        assert!(shell.session().is_anonymous());
        assert_eq!(shell.active_page(), PageId::Index);
    }

    #[tokio::test]
    async fn test_empty_credentials_never_reach_api() {
        // Mock with zero expectations: any login/register call panics
        let shell_api = MockAuthApi::new();
        let mut shell = shell_with(shell_api, vec![Script::SubmitLoginThenCancel("", "")]);

        shell.show_login().await;
        assert!(shell.session().is_anonymous());
        assert_eq!(shell.active_page(), PageId::Index);
    }

    #[tokio::test]
    async fn test_failed_login_leaves_session_unchanged() {
        let mut api = MockAuthApi::new();
        api.expect_login().times(1).returning(|_, _| {
            Err(ApiError::Api { status: 401, message: "Invalid credentials".to_string() })
        });

        let mut shell = shell_with(api, vec![Script::LoginAs("alice", "wrong")]);
        shell.show_login().await;

        assert!(shell.session().is_anonymous());
        assert_eq!(shell.active_page(), PageId::Index);
    }

    #[tokio::test]
    async fn test_register_flow_reaches_dashboard() {
        let mut api = MockAuthApi::new();
        api.expect_register()
            .times(1)
            .returning(|u, _, _| Ok(UserRecord::named(u)));

        let mut shell = shell_with(
            api,
            vec![Script::RegisterAs("bob", "bob@example.com", "password1")],
        );
        shell.dispatch(PageAction::RegisterRequested).await;

        assert_eq!(shell.session().user().unwrap().username, "bob");
        assert_eq!(shell.active_page(), PageId::Dashboard);
    }

    #[tokio::test]
    async fn test_log_out_returns_to_local_mode() {
        let mut api = MockAuthApi::new();
        api.expect_login()
            .times(1)
            .returning(|u, _| Ok(UserRecord::named(u)));

        let mut shell = shell_with(api, vec![Script::LoginAs("alice", "secret")]);
        shell.show_login().await;
        assert!(!shell.session().is_anonymous());

        shell.log_out().await;
        assert!(shell.session().is_anonymous());
        assert_eq!(shell.dashboard_page().unwrap().viewer.text, "Local mode");
    }

    #[tokio::test]
    async fn test_theme_toggle_via_dispatch() {
        let mut shell = shell_with(MockAuthApi::new(), vec![]);
        let action = shell.index_page().unwrap().press_theme_toggle();

        shell.dispatch(action).await;
        assert_eq!(shell.theme_mode(), ColorMode::Light);
        assert_eq!(
            shell.index_page().unwrap().theme_mode(),
            ColorMode::Light
        );
    }
}
