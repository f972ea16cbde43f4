//! Light/dark theme toggle for the dashboard shell.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It resolves
//! the initial theme from `localStorage` or the system color-scheme
//! preference, writes it to the `data-theme` attribute on `<html>`, and flips
//! it whenever the toggle button is pressed. The page's stylesheet keys off
//! that attribute; nothing else in the page needs to know about this crate.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | The [`theme::Theme`] value, its string forms and icons |
//! | [`controller`] | Testable [`controller::ThemeController`] |
//! | [`surface`] | Traits for the document, toggle, storage and preference signal |
//! | [`memory`] | In-memory surfaces (session fallback storage, test doubles) |
//! | [`web`] | `web-sys` surfaces and the JS entry points |
//! | [`config`] | Attachment points and storage key |
//! | [`consts`] | Default names and icons |
//! | [`error`] | Error types |

pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod memory;
pub mod surface;
pub mod theme;
pub mod web;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::{ParseThemeError, StorageError, ThemeError};
pub use theme::Theme;
