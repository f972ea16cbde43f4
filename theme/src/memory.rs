//! Plain-Rust surfaces.
//!
//! [`MemoryStore`] doubles as the session-only store the controller falls
//! back to when `localStorage` fails. The others let the controller run
//! headless (unit tests, server-side rendering).

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::HashMap;

use crate::error::StorageError;
use crate::surface::{ColorSchemeSignal, PreferenceStore, ThemeRoot, ToggleControl};

/// Key-value store that lives as long as the page.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry. Seeding does not count as a write.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_owned(), value.to_owned());
        Self { entries, writes: 0 }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.writes += 1;
    }

    /// Number of [`MemoryStore::set`] calls so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key).map(str::to_owned))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.set(key, value);
        Ok(())
    }
}

/// Root element stand-in.
#[derive(Clone, Debug, Default)]
pub struct MemoryRoot {
    pub attribute: Option<String>,
}

impl ThemeRoot for MemoryRoot {
    fn theme_attribute(&self) -> Option<String> {
        self.attribute.clone()
    }

    fn set_theme_attribute(&mut self, value: &str) {
        self.attribute = Some(value.to_owned());
    }
}

/// Toggle button stand-in; keeps the last rendered icon.
#[derive(Clone, Debug, Default)]
pub struct MemoryToggle {
    pub icon: Option<String>,
    pub mounted: bool,
}

impl ToggleControl for MemoryToggle {
    fn set_icon(&mut self, icon: &str) {
        self.icon = Some(icon.to_owned());
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn mark_mounted(&mut self) {
        self.mounted = true;
    }
}

/// Signal with a fixed answer. `FixedSignal(None)` models an environment
/// without `matchMedia`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedSignal(pub Option<bool>);

impl ColorSchemeSignal for FixedSignal {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}
