//! Seams between the controller and the page.
//!
//! The controller only talks to these traits. [`crate::web`] implements them
//! over `web-sys`; [`crate::memory`] implements them in plain Rust so the
//! controller runs under `cargo test` without a browser.

use crate::error::StorageError;

/// The root element carrying the theme attribute.
pub trait ThemeRoot {
    /// Current attribute value, if set.
    fn theme_attribute(&self) -> Option<String>;

    /// Overwrite the attribute.
    fn set_theme_attribute(&mut self, value: &str);
}

/// The button whose content shows the theme icon.
pub trait ToggleControl {
    fn set_icon(&mut self, icon: &str);

    /// Whether a controller already owns this control.
    fn is_mounted(&self) -> bool;

    /// Claim the control for a controller.
    fn mark_mounted(&mut self);
}

/// Client-local key-value storage that survives reloads.
pub trait PreferenceStore {
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing storage cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError`] if the value cannot be written.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The environment's "prefers dark" signal.
pub trait ColorSchemeSignal {
    /// `Some(true)` if dark is preferred, `None` if the signal is unavailable.
    fn prefers_dark(&self) -> Option<bool>;
}
