#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::consts::{DARK_ICON, LIGHT_ICON};
use crate::error::ParseThemeError;

/// One of the two visual modes the page supports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// String form stored in `localStorage` and in `data-theme`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon rendered in the toggle while this theme is applied.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => LIGHT_ICON,
            Self::Dark => DARK_ICON,
        }
    }

    /// Theme implied by the system color-scheme signal.
    ///
    /// An unavailable signal (`None`) counts as "not dark".
    #[must_use]
    pub fn from_dark_preference(prefers_dark: Option<bool>) -> Self {
        if prefers_dark.unwrap_or(false) {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}
