//! User interface core for the ChemFlow desktop client
//!
//! This crate is the shell's half of the UI: navigation, the modal auth
//! dialog, and theme propagation. Widget painting belongs to whichever
//! rendering toolkit hosts the shell; everything here is the state that
//! toolkit renders.
//!
//! # Modules
//!
//! - [`theme`] - The two-mode theme system and the [`theme::Themeable`] capability
//! - [`components`] - Role-tagged widget primitives
//! - [`pages`] - Pages, page identity, and the action surface
//! - [`dialog`] - The modal login/register state machine
//! - [`shell`] - The orchestrator owning session, theme, and the active page
//!
//! # Example
//!
//! ```rust
//! use app_ui::theme::{get_theme, ColorMode};
//! use app_ui::pages::IndexPage;
//!
//! let theme = get_theme(ColorMode::Dark);
//! assert!(theme.is_dark());
//!
//! let page = IndexPage::new(&theme);
//! assert_eq!(page.btn_log_in.label, "Log In");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod dialog;
pub mod pages;
pub mod shell;
pub mod theme;

// Re-export commonly used types
pub use components::{button_style, input_style, Button, ButtonStyle, InputStyle, Label, Role};
pub use dialog::{
    AuthDialog, AuthMode, DialogDriver, DialogPhase, DialogResult, Notice, Severity,
    ValidationError,
};
pub use pages::{DashboardPage, IndexPage, Page, PageAction, PageId};
pub use shell::Shell;
pub use theme::{
    dark_theme, get_theme, light_theme, Color, ColorMode, Palette, Theme, ThemeState, Themeable,
};
