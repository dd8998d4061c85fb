//! Role-tagged widget primitives
//!
//! Every control is tagged with a [`Role`] at construction, and theme
//! application resolves styles from that role. Restyling never inspects a
//! widget's display text; the label of the theme toggle changes *because* of
//! its role, not the other way around.

use crate::theme::{Color, Theme, Themeable};

/// Role of a button, assigned at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Primary form submission (log in, create account)
    Submit,
    /// Dismissal without side effects (continue without login)
    Cancel,
    /// Plain navigation control
    Nav,
    /// Emphasized navigation control (Get Started)
    NavPrimary,
    /// The light/dark toggle
    ThemeToggle,
}

/// Role of a text element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    /// Page heading
    Heading,
    /// Body copy
    Body,
    /// De-emphasized copy
    Muted,
}

/// Resolved button colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonStyle {
    /// Background color, `None` for transparent
    pub background: Option<Color>,
    /// Text color
    pub text: Color,
    /// Border color, `None` for borderless
    pub border: Option<Color>,
}

/// Resolve a button style from its role
pub fn button_style(role: Role, theme: &Theme) -> ButtonStyle {
    let p = &theme.palette;
    match role {
        Role::Submit => ButtonStyle {
            background: Some(p.primary.clone()),
            text: "#FFFFFF".to_string(),
            border: None,
        },
        Role::Cancel => ButtonStyle {
            background: None,
            text: p.text_muted.clone(),
            border: Some(p.border.clone()),
        },
        Role::Nav => ButtonStyle {
            background: Some(p.surface.clone()),
            text: p.text.clone(),
            border: Some(p.border.clone()),
        },
        Role::NavPrimary => ButtonStyle {
            background: Some(p.primary.clone()),
            text: "#FFFFFF".to_string(),
            border: None,
        },
        Role::ThemeToggle => ButtonStyle {
            background: None,
            text: p.text.clone(),
            border: None,
        },
    }
}

/// Resolved input-field colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputStyle {
    /// Background color
    pub background: Color,
    /// Text color
    pub text: Color,
    /// Border color
    pub border: Color,
    /// Placeholder text color
    pub placeholder: Color,
}

/// Resolve the input-field style
pub fn input_style(theme: &Theme) -> InputStyle {
    let p = &theme.palette;
    InputStyle {
        background: p.input.clone(),
        text: p.text.clone(),
        border: p.border.clone(),
        placeholder: p.text_muted.clone(),
    }
}

/// A role-tagged button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    /// Role assigned at construction; never changes
    pub role: Role,
    /// Display label
    pub label: String,
    /// Current resolved style
    pub style: ButtonStyle,
}

impl Button {
    /// Create a button styled for the given theme
    pub fn new(role: Role, label: impl Into<String>, theme: &Theme) -> Self {
        let mut button = Self {
            role,
            label: label.into(),
            style: button_style(role, theme),
        };
        if role == Role::ThemeToggle {
            button.label = theme.toggle_icon().to_string();
        }
        button
    }
}

impl Themeable for Button {
    fn apply_theme(&mut self, theme: &Theme) {
        self.style = button_style(self.role, theme);
        if self.role == Role::ThemeToggle {
            self.label = theme.toggle_icon().to_string();
        }
    }
}

/// A role-tagged text element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// Role assigned at construction
    pub role: TextRole,
    /// Display text
    pub text: String,
    /// Current text color
    pub color: Color,
}

impl Label {
    /// Create a label styled for the given theme
    pub fn new(role: TextRole, text: impl Into<String>, theme: &Theme) -> Self {
        Self {
            role,
            text: text.into(),
            color: text_color(role, theme),
        }
    }

    /// Replace the display text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Themeable for Label {
    fn apply_theme(&mut self, theme: &Theme) {
        self.color = text_color(self.role, theme);
    }
}

/// Resolve a text color from its role
pub fn text_color(role: TextRole, theme: &Theme) -> Color {
    let p = &theme.palette;
    match role {
        TextRole::Heading => p.text.clone(),
        TextRole::Body => p.text.clone(),
        TextRole::Muted => p.text_muted.clone(),
    }
}
