//! Error types for the theme crate.

/// Fatal integration errors raised while attaching to the page.
///
/// Each of these means the page is missing something the toggle cannot work
/// without, so they are reported to the integrator instead of being swallowed.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// No global `window` (not running in a browser).
    #[error("no global window available")]
    NoWindow,
    /// The window has no `document`.
    #[error("window has no document")]
    NoDocument,
    /// `document.documentElement` is absent.
    #[error("document has no root element")]
    MissingRoot,
    /// No element with the configured toggle id.
    #[error("toggle control #{id} not found")]
    MissingToggle { id: String },
    /// The toggle control is already driven by another controller.
    #[error("toggle control #{id} is already mounted")]
    AlreadyMounted { id: String },
    /// The click listener could not be registered.
    #[error("failed to attach toggle listener: {0}")]
    Listener(String),
}

/// Failures from the persistent preference store.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Storage is disabled or blocked for this origin.
    #[error("preference storage unavailable")]
    Unavailable,
    /// Reading a key failed.
    #[error("failed to read preference: {0}")]
    Read(String),
    /// Writing a key failed (quota, private mode).
    #[error("failed to write preference: {0}")]
    Write(String),
}

/// Returned when a string is not `"light"` or `"dark"`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct ParseThemeError(pub String);
