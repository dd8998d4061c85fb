//! Design system and theme provider for the ChemFlow desktop client
//!
//! The palette is the website's design system carried over to the desktop
//! shell: a dark slate/navy base with a blue primary, and a bright variant of
//! the same scale for light mode.
//!
//! Exactly two modes exist ([`ColorMode::Light`] and [`ColorMode::Dark`]);
//! there is no system-following third state, and no widget carries a mode of
//! its own. The shell owns the single [`ThemeState`] and pushes the resolved
//! [`Theme`] to everything mounted.

use serde::{Deserialize, Serialize};

pub use storage::ColorMode;

/// A color represented as a hex string (e.g., "#3B82F6")
pub type Color = String;

/// Icon shown on the toggle while in light mode (it switches to dark)
pub const MOON_ICON: &str = "🌙";

/// Icon shown on the toggle while in dark mode (it switches to light)
pub const SUN_ICON: &str = "☀️";

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Semantic color palette for one mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Window background
    pub background: Color,
    /// Raised surfaces (cards, menus)
    pub surface: Color,
    /// Input field background
    pub input: Color,
    /// Primary text
    pub text: Color,
    /// Secondary/muted text
    pub text_muted: Color,
    /// Border and separator color
    pub border: Color,
    /// Primary action color
    pub primary: Color,
    /// Primary action hover color
    pub primary_hover: Color,
    /// Positive action color (account creation)
    pub positive: Color,
    /// Positive action hover color
    pub positive_hover: Color,
    /// Error color
    pub negative: Color,
}

/// Complete theme definition for one mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// The mode this theme renders
    pub name: ColorMode,
    /// Semantic colors
    pub palette: Palette,
}

impl Theme {
    /// Check whether this is the dark theme
    pub fn is_dark(&self) -> bool {
        self.name == ColorMode::Dark
    }

    /// Icon for the theme-toggle control
    ///
    /// The icon always signals the mode the toggle would switch *to*: a moon
    /// while in light mode, a sun while in dark mode.
    pub fn toggle_icon(&self) -> &'static str {
        match self.name {
            ColorMode::Light => MOON_ICON,
            ColorMode::Dark => SUN_ICON,
        }
    }
}

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme {
        name: ColorMode::Light,
        palette: Palette {
            background: "#F8FAFC".to_string(),
            surface: "#FFFFFF".to_string(),
            input: "#FFFFFF".to_string(),
            text: "#0F172A".to_string(),
            text_muted: "#64748B".to_string(),
            border: "#CBD5E1".to_string(),
            primary: "#3B82F6".to_string(),
            primary_hover: "#2563EB".to_string(),
            positive: "#10B981".to_string(),
            positive_hover: "#059669".to_string(),
            negative: "#EF4444".to_string(),
        },
    }
}

/// Create the dark theme
pub fn dark_theme() -> Theme {
    Theme {
        name: ColorMode::Dark,
        palette: Palette {
            background: "#0F172A".to_string(),
            surface: "#1A2A47".to_string(),
            input: "#1E293B".to_string(),
            text: "#F1F5F9".to_string(),
            text_muted: "#64748B".to_string(),
            border: "#334155".to_string(),
            primary: "#3B82F6".to_string(),
            primary_hover: "#2563EB".to_string(),
            positive: "#10B981".to_string(),
            positive_hover: "#059669".to_string(),
            negative: "#EF4444".to_string(),
        },
    }
}

/// Get the theme for a mode
pub fn get_theme(mode: ColorMode) -> Theme {
    match mode {
        ColorMode::Light => light_theme(),
        ColorMode::Dark => dark_theme(),
    }
}

/// The shell's single theme value
///
/// Holds the current mode together with its resolved palette so pages and
/// dialogs receive a ready-to-use [`Theme`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    mode: ColorMode,
    theme: Theme,
}

impl ThemeState {
    /// Create a theme state for the given mode
    pub fn new(mode: ColorMode) -> Self {
        Self { mode, theme: get_theme(mode) }
    }

    /// Current mode
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Current resolved theme
    pub fn current_theme(&self) -> &Theme {
        &self.theme
    }

    /// Set the mode
    pub fn set_mode(&mut self, mode: ColorMode) {
        self.mode = mode;
        self.theme = get_theme(mode);
    }

    /// Flip dark and light, returning the new mode
    pub fn toggle(&mut self) -> ColorMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ColorMode::default())
    }
}

/// Capability of receiving a theme
///
/// Implementations must be idempotent: applying the same theme twice leaves
/// the widget exactly as applying it once does. A widget with no visual
/// response to a given theme simply changes nothing; that is never an error.
pub trait Themeable {
    /// Restyle this widget for the given theme
    fn apply_theme(&mut self, theme: &Theme);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#3B82F6"), Some((59, 130, 246)));
        assert_eq!(parse_hex_color("0F172A"), Some((15, 23, 42)));
        assert_eq!(parse_hex_color("#FFF"), None);
    }

    #[test]
    fn test_theme_basics() {
        assert!(dark_theme().is_dark());
        assert!(!light_theme().is_dark());
        assert_eq!(get_theme(ColorMode::Light), light_theme());
        assert_eq!(get_theme(ColorMode::Dark), dark_theme());
    }

    #[test]
    fn test_toggle_icon_signals_next_mode() {
        // In light mode the control offers dark, and vice versa
        assert_eq!(light_theme().toggle_icon(), MOON_ICON);
        assert_eq!(dark_theme().toggle_icon(), SUN_ICON);
    }

    #[test]
    fn test_palettes_are_valid_hex() {
        for theme in [light_theme(), dark_theme()] {
            let p = &theme.palette;
            for color in [
                &p.background,
                &p.surface,
                &p.input,
                &p.text,
                &p.text_muted,
                &p.border,
                &p.primary,
                &p.primary_hover,
                &p.positive,
                &p.positive_hover,
                &p.negative,
            ] {
                assert!(
                    parse_hex_color(color).is_some(),
                    "invalid color {} in {} theme",
                    color,
                    theme.name
                );
            }
        }
    }

    #[test]
    fn test_text_background_contrast() {
        for theme in [light_theme(), dark_theme()] {
            let bg = parse_hex_color(&theme.palette.background).unwrap();
            let text = parse_hex_color(&theme.palette.text).unwrap();

            let bg_lum = (bg.0 as u32 + bg.1 as u32 + bg.2 as u32) / 3;
            let text_lum = (text.0 as u32 + text.1 as u32 + text.2 as u32) / 3;
            let diff = bg_lum.abs_diff(text_lum);

            assert!(diff > 100, "{} theme lacks text contrast", theme.name);
        }
    }

    #[test]
    fn test_theme_state_starts_dark() {
        let state = ThemeState::default();
        assert_eq!(state.mode(), ColorMode::Dark);
        assert!(state.current_theme().is_dark());
    }

    #[test]
    fn test_theme_state_toggle_alternates() {
        let mut state = ThemeState::default();

        assert_eq!(state.toggle(), ColorMode::Light);
        assert_eq!(state.current_theme().name, ColorMode::Light);

        assert_eq!(state.toggle(), ColorMode::Dark);
        assert_eq!(state.current_theme().name, ColorMode::Dark);

        // Any even number of toggles lands back where it started
        for _ in 0..6 {
            state.toggle();
        }
        assert_eq!(state.mode(), ColorMode::Dark);
    }

    #[test]
    fn test_theme_serialization() {
        let theme = dark_theme();
        let json = serde_json::to_string(&theme).unwrap();
        let parsed: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, theme);
    }
}
