#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{DARK_SCHEME_QUERY, STORAGE_KEY, THEME_ATTRIBUTE, TOGGLE_ID};

/// Where the controller attaches and what it persists under.
///
/// Defaults match the dashboard shell markup; pages that use a different
/// button id override it through [`ThemeConfig::with_toggle_id`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub attribute: String,
    pub toggle_id: String,
    pub dark_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            attribute: THEME_ATTRIBUTE.to_owned(),
            toggle_id: TOGGLE_ID.to_owned(),
            dark_query: DARK_SCHEME_QUERY.to_owned(),
        }
    }
}

impl ThemeConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different toggle element id. Empty ids keep the default.
    #[must_use]
    pub fn with_toggle_id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        if !id.trim().is_empty() {
            self.toggle_id = id;
        }
        self
    }
}
