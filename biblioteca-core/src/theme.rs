use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// localStorage key for the persisted theme preference.
pub const STORAGE_KEY: &str = "theme";

/// Attribute on the root element that the stylesheet keys off.
pub const ROOT_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Spanish adjective used in announcements ("claro" / "oscuro").
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Light => "claro",
            Self::Dark => "oscuro",
        }
    }

    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Seeding rule for the active theme at startup: a persisted preference
/// always wins; otherwise follow the system color-scheme.
#[must_use]
pub const fn initial_theme(stored: Option<Theme>, system_dark: bool) -> Theme {
    match stored {
        Some(theme) => theme,
        None if system_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// What the toggle control should show for a given active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonView {
    pub icon: &'static str,
    pub text: &'static str,
    pub aria_label: &'static str,
}

/// The toggle always names the theme the user would switch *to*, not the
/// one currently active.
#[must_use]
pub const fn button_view(current: Theme) -> ButtonView {
    match current {
        Theme::Dark => ButtonView {
            icon: "\u{2600}\u{fe0f}",
            text: "Tema Claro",
            aria_label: "Cambiar a tema claro",
        },
        Theme::Light => ButtonView {
            icon: "\u{1f319}",
            text: "Tema Oscuro",
            aria_label: "Cambiar a tema oscuro",
        },
    }
}

/// Screen-reader text announced after a toggle lands on `new_theme`.
#[must_use]
pub fn changed_announcement(new_theme: Theme) -> String {
    format!("Tema cambiado a {}", new_theme.display_name())
}
