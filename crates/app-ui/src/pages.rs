//! Pages and the navigation surface
//!
//! A page is a navigable, themeable view mounted into the shell. Pages never
//! navigate themselves; user interactions produce [`PageAction`]s that the
//! shell routes through its single dispatch path. This keeps pages decoupled
//! from each other and from dialog logic.

use crate::components::{Button, Label, Role, TextRole};
use crate::theme::{ColorMode, Theme, Themeable};

/// Identity of a navigable destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    /// Landing/marketing page
    Index,
    /// Equipment analytics dashboard
    Dashboard,
}

impl PageId {
    /// Display title of the destination
    pub fn title(&self) -> &'static str {
        match self {
            PageId::Index => "Home",
            PageId::Dashboard => "Dashboard",
        }
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Navigation request raised by a page control
///
/// The shell subscribes to these exactly once per page instance via its
/// dispatch method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// Open the auth dialog on the login tab
    LoginRequested,
    /// Open the auth dialog on the register tab
    RegisterRequested,
    /// Navigate to the dashboard
    DashboardRequested,
    /// Navigate back to the landing page
    IndexRequested,
    /// Flip the light/dark mode
    ThemeToggleRequested,
}

/// A navigable, themeable view
///
/// Lifecycle: constructed (lazily, or eagerly for the landing page), then
/// mounted and detached by the shell as navigation happens. A detached page
/// keeps its widgets and is remounted without reconstruction; the shell
/// re-applies the active theme on every remount since the mode may have
/// changed while the page was away.
pub trait Page: Themeable {
    /// Identity of this page
    fn id(&self) -> PageId;

    /// The mode this page last had applied
    fn theme_mode(&self) -> ColorMode;

    /// Whether the page is currently attached to the window
    fn is_mounted(&self) -> bool;

    /// Attach or detach the page
    fn set_mounted(&mut self, mounted: bool);
}

/// The landing page: brand nav, hero copy, and calls to action
#[derive(Debug, Clone)]
pub struct IndexPage {
    /// "Log In" nav button
    pub btn_log_in: Button,
    /// "Get Started" nav button
    pub btn_get_started: Button,
    /// Light/dark toggle
    pub btn_theme_toggle: Button,
    /// "Create your workspace" hero CTA
    pub btn_create_workspace: Button,
    /// "View dashboard" hero CTA
    pub btn_view_dashboard: Button,
    /// Hero heading
    pub heading: Label,
    /// Hero subtitle
    pub subtitle: Label,
    mode: ColorMode,
    mounted: bool,
}

impl IndexPage {
    /// Build the landing page styled for the given theme
    pub fn new(theme: &Theme) -> Self {
        Self {
            btn_log_in: Button::new(Role::Nav, "Log In", theme),
            btn_get_started: Button::new(Role::NavPrimary, "Get Started", theme),
            btn_theme_toggle: Button::new(Role::ThemeToggle, "", theme),
            btn_create_workspace: Button::new(Role::NavPrimary, "Create your workspace", theme),
            btn_view_dashboard: Button::new(Role::Nav, "View dashboard", theme),
            heading: Label::new(
                TextRole::Heading,
                "Upload, analyze, and visualize chemical equipment datasets in seconds.",
                theme,
            ),
            subtitle: Label::new(
                TextRole::Muted,
                "Flow-rate trends, pressure deviations, temperature correlations, and more.",
                theme,
            ),
            mode: theme.name,
            mounted: false,
        }
    }

    /// "Log In" pressed
    pub fn press_log_in(&self) -> PageAction {
        PageAction::LoginRequested
    }

    /// "Get Started" pressed: registration-first auth flow
    pub fn press_get_started(&self) -> PageAction {
        PageAction::RegisterRequested
    }

    /// "Create your workspace" pressed: registration-first auth flow
    pub fn press_create_workspace(&self) -> PageAction {
        PageAction::RegisterRequested
    }

    /// "View dashboard" pressed
    pub fn press_view_dashboard(&self) -> PageAction {
        PageAction::DashboardRequested
    }

    /// Theme toggle pressed
    pub fn press_theme_toggle(&self) -> PageAction {
        PageAction::ThemeToggleRequested
    }
}

impl Themeable for IndexPage {
    fn apply_theme(&mut self, theme: &Theme) {
        self.btn_log_in.apply_theme(theme);
        self.btn_get_started.apply_theme(theme);
        self.btn_theme_toggle.apply_theme(theme);
        self.btn_create_workspace.apply_theme(theme);
        self.btn_view_dashboard.apply_theme(theme);
        self.heading.apply_theme(theme);
        self.subtitle.apply_theme(theme);
        self.mode = theme.name;
    }
}

impl Page for IndexPage {
    fn id(&self) -> PageId {
        PageId::Index
    }

    fn theme_mode(&self) -> ColorMode {
        self.mode
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn set_mounted(&mut self, mounted: bool) {
        self.mounted = mounted;
    }
}

/// The dashboard destination
///
/// The analytics surface itself lives elsewhere; this page carries the frame
/// around it (heading, viewer line, way back home). It is reachable with or
/// without a session — local mode is explicitly supported.
#[derive(Debug, Clone)]
pub struct DashboardPage {
    /// Page heading
    pub heading: Label,
    /// Who is viewing: the signed-in username or local mode
    pub viewer: Label,
    /// Back-to-landing-page button
    pub btn_back_home: Button,
    mode: ColorMode,
    mounted: bool,
}

impl DashboardPage {
    /// Build the dashboard frame styled for the given theme
    pub fn new(theme: &Theme) -> Self {
        Self {
            heading: Label::new(TextRole::Heading, "Equipment dashboard", theme),
            viewer: Label::new(TextRole::Muted, "Local mode", theme),
            btn_back_home: Button::new(Role::Nav, "Back to home", theme),
            mode: theme.name,
            mounted: false,
        }
    }

    /// Update the viewer line for the current session
    pub fn set_viewer(&mut self, username: Option<&str>) {
        match username {
            Some(name) => self.viewer.set_text(format!("Signed in as {}", name)),
            None => self.viewer.set_text("Local mode"),
        }
    }

    /// "Back to home" pressed
    pub fn press_back_home(&self) -> PageAction {
        PageAction::IndexRequested
    }
}

impl Themeable for DashboardPage {
    fn apply_theme(&mut self, theme: &Theme) {
        self.heading.apply_theme(theme);
        self.viewer.apply_theme(theme);
        self.btn_back_home.apply_theme(theme);
        self.mode = theme.name;
    }
}

impl Page for DashboardPage {
    fn id(&self) -> PageId {
        PageId::Dashboard
    }

    fn theme_mode(&self) -> ColorMode {
        self.mode
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn set_mounted(&mut self, mounted: bool) {
        self.mounted = mounted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{dark_theme, light_theme, MOON_ICON, SUN_ICON};

    #[test]
    fn test_index_page_actions() {
        let page = IndexPage::new(&dark_theme());
        assert_eq!(page.press_log_in(), PageAction::LoginRequested);
        assert_eq!(page.press_get_started(), PageAction::RegisterRequested);
        assert_eq!(page.press_create_workspace(), PageAction::RegisterRequested);
        assert_eq!(page.press_view_dashboard(), PageAction::DashboardRequested);
        assert_eq!(page.press_theme_toggle(), PageAction::ThemeToggleRequested);
    }

    #[test]
    fn test_index_page_theme_application() {
        let mut page = IndexPage::new(&dark_theme());
        assert_eq!(page.theme_mode(), ColorMode::Dark);
        assert_eq!(page.btn_theme_toggle.label, SUN_ICON);

        page.apply_theme(&light_theme());
        assert_eq!(page.theme_mode(), ColorMode::Light);
        assert_eq!(page.btn_theme_toggle.label, MOON_ICON);
        assert_eq!(page.heading.color, "#0F172A");
        assert_eq!(page.btn_log_in.style.text, "#0F172A");
    }

    #[test]
    fn test_index_page_apply_theme_idempotent() {
        let theme = light_theme();
        let mut once = IndexPage::new(&theme);
        once.apply_theme(&theme);
        let mut twice = once.clone();
        twice.apply_theme(&theme);

        assert_eq!(once.heading, twice.heading);
        assert_eq!(once.btn_theme_toggle, twice.btn_theme_toggle);
        assert_eq!(once.btn_log_in, twice.btn_log_in);
    }

    #[test]
    fn test_page_lifecycle_flags() {
        let mut page = DashboardPage::new(&dark_theme());
        assert!(!page.is_mounted());

        page.set_mounted(true);
        assert!(page.is_mounted());

        page.set_mounted(false);
        assert!(!page.is_mounted());
    }

    #[test]
    fn test_dashboard_viewer_line() {
        let mut page = DashboardPage::new(&dark_theme());
        assert_eq!(page.viewer.text, "Local mode");

        page.set_viewer(Some("alice"));
        assert_eq!(page.viewer.text, "Signed in as alice");

        page.set_viewer(None);
        assert_eq!(page.viewer.text, "Local mode");
    }

    #[test]
    fn test_page_titles() {
        assert_eq!(PageId::Index.title(), "Home");
        assert_eq!(PageId::Dashboard.to_string(), "Dashboard");
    }
}
