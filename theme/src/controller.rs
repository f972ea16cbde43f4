use crate::config::ThemeConfig;
use crate::error::{StorageError, ThemeError};
use crate::memory::MemoryStore;
use crate::surface::{ColorSchemeSignal, PreferenceStore, ThemeRoot, ToggleControl};
use crate::theme::Theme;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Resolves, applies and flips the page theme.
///
/// The root attribute is the source of truth for what is applied; storage is
/// read once in [`ThemeController::initialize`] and written on every toggle.
/// Separated from the browser glue in [`crate::web`] so it can be tested
/// without WASM.
pub struct ThemeController<R, T, S, P> {
    config: ThemeConfig,
    root: R,
    toggle: T,
    store: S,
    signal: P,
    /// Set after the first storage failure; all later reads and writes go here.
    fallback: Option<MemoryStore>,
}

impl<R, T, S, P> ThemeController<R, T, S, P>
where
    R: ThemeRoot,
    T: ToggleControl,
    S: PreferenceStore,
    P: ColorSchemeSignal,
{
    pub fn new(config: ThemeConfig, root: R, toggle: T, store: S, signal: P) -> Self {
        Self { config, root, toggle, store, signal, fallback: None }
    }

    /// Build a controller from looked-up attachment points and claim the toggle.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::MissingRoot`] or [`ThemeError::MissingToggle`] if a
    /// lookup came back empty, and [`ThemeError::AlreadyMounted`] if another
    /// controller already owns the toggle.
    pub fn attach(
        config: ThemeConfig,
        root: Option<R>,
        toggle: Option<T>,
        store: S,
        signal: P,
    ) -> Result<Self, ThemeError> {
        let root = root.ok_or(ThemeError::MissingRoot)?;
        let mut toggle =
            toggle.ok_or_else(|| ThemeError::MissingToggle { id: config.toggle_id.clone() })?;
        if toggle.is_mounted() {
            return Err(ThemeError::AlreadyMounted { id: config.toggle_id.clone() });
        }
        toggle.mark_mounted();
        Ok(Self::new(config, root, toggle, store, signal))
    }

    /// Resolve the initial theme and apply it.
    ///
    /// A non-empty stored value wins; otherwise the system preference decides.
    /// Nothing is persisted here, even when the preference was used.
    pub fn initialize(&mut self) -> Theme {
        let theme = match self.stored_theme() {
            Some(theme) => theme,
            None => Theme::from_dark_preference(self.signal.prefers_dark()),
        };
        self.root.set_theme_attribute(theme.as_str());
        self.toggle.set_icon(theme.icon());
        log::debug!("theme initialized to {theme}");
        theme
    }

    /// Flip the applied theme, persist it and re-render the icon.
    ///
    /// Anything other than `light` on the root counts as dark, so a missing or
    /// foreign attribute flips to `light`.
    pub fn handle_toggle(&mut self) -> Theme {
        let next = self.current().map_or(Theme::Light, Theme::toggled);
        self.root.set_theme_attribute(next.as_str());
        self.save_preference(next);
        self.toggle.set_icon(next.icon());
        log::debug!("theme toggled to {next}");
        next
    }

    /// Theme currently on the root element.
    #[must_use]
    pub fn current(&self) -> Option<Theme> {
        self.root.theme_attribute()?.parse().ok()
    }

    // --- Accessors ---

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[must_use]
    pub fn root(&self) -> &R {
        &self.root
    }

    #[must_use]
    pub fn toggle(&self) -> &T {
        &self.toggle
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The session-only store, once storage has failed.
    #[must_use]
    pub fn fallback_store(&self) -> Option<&MemoryStore> {
        self.fallback.as_ref()
    }

    // --- Storage ---

    fn stored_theme(&mut self) -> Option<Theme> {
        let raw = self.load_preference()?;
        if raw.is_empty() {
            return None;
        }
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(err) => {
                log::warn!("ignoring stored preference: {err}");
                None
            }
        }
    }

    fn load_preference(&mut self) -> Option<String> {
        let key = &self.config.storage_key;
        if let Some(fallback) = &self.fallback {
            return fallback.get(key).map(str::to_owned);
        }
        match self.store.load(key) {
            Ok(value) => value,
            Err(err) => {
                self.degrade(&err);
                None
            }
        }
    }

    fn save_preference(&mut self, theme: Theme) {
        if self.fallback.is_none() {
            match self.store.save(&self.config.storage_key, theme.as_str()) {
                Ok(()) => return,
                Err(err) => self.degrade(&err),
            }
        }
        let key = &self.config.storage_key;
        self.fallback
            .get_or_insert_with(MemoryStore::new)
            .set(key, theme.as_str());
    }

    fn degrade(&mut self, err: &StorageError) {
        log::warn!("{err}; keeping theme in memory for this session");
        self.fallback = Some(MemoryStore::new());
    }
}
