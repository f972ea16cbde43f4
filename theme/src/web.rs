//! Browser bindings.
//!
//! Implements the [`crate::surface`] traits over `web-sys` and exposes the
//! JS entry points. Requires a browser environment; validation of the
//! lookups happens in [`ThemeController::attach`], which is tested natively.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Storage, Window};

use crate::config::ThemeConfig;
use crate::consts::MOUNTED_ATTRIBUTE;
use crate::controller::ThemeController;
use crate::error::{StorageError, ThemeError};
use crate::surface::{ColorSchemeSignal, PreferenceStore, ThemeRoot, ToggleControl};

/// Controller wired to the live page.
pub type WebController = ThemeController<DocumentRoot, ToggleButton, LocalStore, MediaSignal>;

// =============================================================
// Surfaces
// =============================================================

/// `document.documentElement`.
pub struct DocumentRoot {
    element: Element,
    attribute: String,
}

impl ThemeRoot for DocumentRoot {
    fn theme_attribute(&self) -> Option<String> {
        self.element.get_attribute(&self.attribute)
    }

    fn set_theme_attribute(&mut self, value: &str) {
        if let Err(err) = self.element.set_attribute(&self.attribute, value) {
            log::error!("failed to set {}: {}", self.attribute, describe(&err));
        }
    }
}

/// The toggle element; the icon replaces its inner HTML.
pub struct ToggleButton {
    element: Element,
}

impl ToggleControl for ToggleButton {
    fn set_icon(&mut self, icon: &str) {
        self.element.set_inner_html(icon);
    }

    fn is_mounted(&self) -> bool {
        self.element.has_attribute(MOUNTED_ATTRIBUTE)
    }

    fn mark_mounted(&mut self) {
        if let Err(err) = self.element.set_attribute(MOUNTED_ATTRIBUTE, "") {
            log::warn!("failed to mark toggle mounted: {}", describe(&err));
        }
    }
}

/// `window.localStorage`, or nothing if the origin may not use it.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage blocked: {}", describe(&err));
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .get_item(key)
            .map_err(|err| StorageError::Read(describe(&err)))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::Write(describe(&err)))
    }
}

/// `window.matchMedia(query)`.
pub struct MediaSignal {
    window: Window,
    query: String,
}

impl ColorSchemeSignal for MediaSignal {
    fn prefers_dark(&self) -> Option<bool> {
        match self.window.match_media(&self.query) {
            Ok(list) => list.map(|list| list.matches()),
            Err(err) => {
                log::debug!("matchMedia({}) failed: {}", self.query, describe(&err));
                None
            }
        }
    }
}

// =============================================================
// Attachment
// =============================================================

/// Look up the page's attachment points and build a controller.
///
/// # Errors
///
/// Returns [`ThemeError`] if the window, document, root element or toggle
/// control is missing, or if the toggle is already mounted. Missing storage
/// is not an error.
pub fn attach(config: ThemeConfig) -> Result<WebController, ThemeError> {
    let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
    let document = window.document().ok_or(ThemeError::NoDocument)?;
    let root = document
        .document_element()
        .map(|element| DocumentRoot { element, attribute: config.attribute.clone() });
    let toggle = document
        .get_element_by_id(&config.toggle_id)
        .map(|element| ToggleButton { element });

    let store = LocalStore::from_window(&window);
    let signal = MediaSignal { window, query: config.dark_query.clone() };
    ThemeController::attach(config, root, toggle, store, signal)
}

/// JS-side handle on a mounted toggle.
#[wasm_bindgen]
pub struct ThemeHandle {
    controller: Rc<RefCell<WebController>>,
}

impl ThemeHandle {
    /// Attach, apply the initial theme and listen for clicks.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError`] if attachment fails or the listener cannot be
    /// registered.
    pub fn mount(config: ThemeConfig) -> Result<Self, ThemeError> {
        let mut controller = attach(config)?;
        let theme = controller.initialize();
        log::info!("theme toggle mounted ({theme})");

        let target = controller.toggle().element.clone();
        let controller = Rc::new(RefCell::new(controller));
        let controller_for_cb = Rc::clone(&controller);
        let cb = Closure::wrap(Box::new(move || match controller_for_cb.try_borrow_mut() {
            Ok(mut controller) => {
                controller.handle_toggle();
            }
            Err(_) => log::warn!("toggle ignored: controller busy"),
        }) as Box<dyn FnMut()>);

        target
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .map_err(|err| ThemeError::Listener(describe(&err)))?;
        // The button lives as long as the page.
        cb.forget();

        Ok(Self { controller })
    }
}

#[wasm_bindgen]
impl ThemeHandle {
    /// Flip the theme as a click would. Returns the new theme.
    pub fn toggle(&self) -> Result<String, JsValue> {
        let mut controller = self
            .controller
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("theme controller busy"))?;
        Ok(controller.handle_toggle().as_str().to_owned())
    }

    /// Theme currently on `<html>`.
    pub fn theme(&self) -> Option<String> {
        match self.controller.try_borrow() {
            Ok(controller) => controller.current().map(|theme| theme.as_str().to_owned()),
            Err(_) => None,
        }
    }
}

// =============================================================
// JS entry points
// =============================================================

/// Runs when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("keeping the page's logger: {err}");
    }
}

/// Mount the toggle on the element with `toggle_id` (default `theme-toggle`).
///
/// # Errors
///
/// Throws a JS `Error` if the page is missing the root element or the toggle
/// control, or if the toggle is already mounted. One mount per toggle.
#[wasm_bindgen]
pub fn mount(toggle_id: Option<String>) -> Result<ThemeHandle, JsValue> {
    let config = match toggle_id {
        Some(id) => ThemeConfig::new().with_toggle_id(id),
        None => ThemeConfig::new(),
    };
    ThemeHandle::mount(config).map_err(|err| {
        log::error!("theme toggle disabled: {err}");
        JsValue::from(err)
    })
}

impl From<ThemeError> for JsValue {
    fn from(err: ThemeError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

fn describe(value: &JsValue) -> String {
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{value:?}"),
    }
}
