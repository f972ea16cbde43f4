//! Shared constants for the theme crate.

// ── Attachment points ───────────────────────────────────────────

/// `localStorage` key holding the persisted theme.
pub const STORAGE_KEY: &str = "theme";

/// Attribute on `<html>` that stylesheets select on.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Element id of the toggle button.
pub const TOGGLE_ID: &str = "theme-toggle";

/// Marker attribute set on a toggle once a controller owns it.
pub const MOUNTED_ATTRIBUTE: &str = "data-theme-mounted";

/// Media query reporting a system-level dark preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Icons ───────────────────────────────────────────────────────

/// Shown while the light theme is applied.
pub const LIGHT_ICON: &str = "\u{1F319}";

/// Shown while the dark theme is applied.
pub const DARK_ICON: &str = "\u{2600}\u{FE0F}";
