//! Browser adapters and the functions the page calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page loads the wasm module from a `<script type="module">` in `<head>`
//! and calls [`init_theme`] as soon as it is instantiated, then
//! [`bind_toggle_button`]. The stylesheet keeps `<body>` hidden until one
//! of the two markers is on `<html>`, so nothing paints in the wrong theme. Everything
//! here is glue: `web-sys` types wrapped in the [`crate::ports`] traits.
//!
//! All fallible `web-sys` calls map their `JsValue` error into
//! [`ThemeError`]; the exports convert back to `JsValue` at the boundary.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DomTokenList, HtmlElement, Storage, Window};

use crate::config::{ThemeConfig, console_log_level};
use crate::error::ThemeError;
use crate::initializer::initialize;
use crate::ports::{
    ActivationHandler, ActivationTarget, ControlLookup, PreferenceStorage, SystemSchemePreference,
    ThemeMarkerSink,
};
use crate::store::ThemeStore;
use crate::toggle::bind_toggle;

impl From<ThemeError> for JsValue {
    fn from(err: ThemeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

// =============================================================================
// ADAPTERS
// =============================================================================

/// `window.localStorage`, or the reason it is not available.
pub struct LocalStorage {
    storage: Result<Storage, ThemeError>,
}

impl LocalStorage {
    #[must_use]
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(ThemeError::StorageUnavailable("localStorage is null".into())),
            Err(e) => Err(ThemeError::StorageUnavailable(js_message(&e))),
        };
        Self { storage }
    }

    fn handle(&self) -> Result<&Storage, ThemeError> {
        self.storage.as_ref().map_err(Clone::clone)
    }
}

impl PreferenceStorage for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.handle()?
            .get_item(key)
            .map_err(|e| ThemeError::Storage(js_message(&e)))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.handle()?
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(js_message(&e)))
    }
}

/// `document.documentElement.classList`.
pub struct RootMarkers {
    list: DomTokenList,
}

impl RootMarkers {
    /// # Errors
    ///
    /// Returns [`ThemeError::DocumentUnavailable`] if the document has no
    /// root element.
    pub fn from_document(document: &Document) -> Result<Self, ThemeError> {
        let root = document.document_element().ok_or(ThemeError::DocumentUnavailable)?;
        Ok(Self { list: root.class_list() })
    }
}

impl ThemeMarkerSink for RootMarkers {
    fn set_marker(&mut self, class: &str, present: bool) -> Result<(), ThemeError> {
        self.list
            .toggle_with_force(class, present)
            .map(|_| ())
            .map_err(|e| ThemeError::Markers(js_message(&e)))
    }

    fn has_marker(&self, class: &str) -> Result<bool, ThemeError> {
        Ok(self.list.contains(class))
    }
}

/// `window.matchMedia`.
pub struct MediaScheme {
    window: Window,
}

impl MediaScheme {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl SystemSchemePreference for MediaScheme {
    fn prefers_dark(&self, query: &str) -> Result<bool, ThemeError> {
        match self.window.match_media(query) {
            Ok(Some(list)) => Ok(list.matches()),
            Ok(None) => Err(ThemeError::SchemeQuery(format!("matchMedia({query}) returned null"))),
            Err(e) => Err(ThemeError::SchemeQuery(js_message(&e))),
        }
    }
}

/// An element that takes an `onclick` handler.
pub struct DomControl {
    element: HtmlElement,
}

impl ActivationTarget for DomControl {
    fn on_activate(&mut self, handler: ActivationHandler) -> Result<(), ThemeError> {
        let closure = Closure::<dyn FnMut()>::wrap(handler);
        let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
        self.element.set_onclick(Some(callback));
        // The handler lives as long as the page.
        closure.forget();
        Ok(())
    }
}

/// `document.getElementById`, restricted to HTML elements.
pub struct DomControls {
    document: Document,
}

impl DomControls {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ControlLookup for DomControls {
    type Control = DomControl;

    fn control_by_id(&self, id: &str) -> Option<DomControl> {
        let element = self.document.get_element_by_id(id)?;
        let Ok(element) = element.dyn_into::<HtmlElement>() else {
            log::warn!("theme: #{id} is not an HTML element; toggle not bound");
            return None;
        };
        Some(DomControl { element })
    }
}

// =============================================================================
// EXPORTS
// =============================================================================

struct Page {
    window: Window,
    document: Document,
}

impl Page {
    fn current() -> Result<Self, ThemeError> {
        let window = web_sys::window().ok_or(ThemeError::DocumentUnavailable)?;
        let document = window.document().ok_or(ThemeError::DocumentUnavailable)?;
        Ok(Self { window, document })
    }

    fn store(&self, config: ThemeConfig) -> Result<ThemeStore<LocalStorage, RootMarkers>, ThemeError> {
        let markers = RootMarkers::from_document(&self.document)?;
        Ok(ThemeStore::new(LocalStorage::from_window(&self.window), markers, config))
    }
}

/// Install the panic hook and route `log` to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(console_log_level()).is_ok() {
        log::debug!("theme: console logger installed");
    }
}

/// Apply the initial theme. Returns `true` when dark was applied.
///
/// # Errors
///
/// Throws only when there is no document or its root class list cannot be
/// updated.
#[wasm_bindgen]
pub fn init_theme() -> Result<bool, JsValue> {
    run_initializer(ThemeConfig::default())
}

/// [`init_theme`] with a JSON object overriding [`ThemeConfig`] fields.
///
/// # Errors
///
/// Throws on invalid config, or as [`init_theme`].
#[wasm_bindgen]
pub fn init_theme_with_config(config_json: &str) -> Result<bool, JsValue> {
    run_initializer(ThemeConfig::from_json(config_json)?)
}

/// Wire the toggle button. Returns `false` when the page has no button.
///
/// # Errors
///
/// Throws only when there is no document.
#[wasm_bindgen]
pub fn bind_toggle_button() -> Result<bool, JsValue> {
    run_binding(ThemeConfig::default())
}

/// [`bind_toggle_button`] with a JSON object overriding [`ThemeConfig`]
/// fields.
///
/// # Errors
///
/// Throws on invalid config, or as [`bind_toggle_button`].
#[wasm_bindgen]
pub fn bind_toggle_button_with_config(config_json: &str) -> Result<bool, JsValue> {
    run_binding(ThemeConfig::from_json(config_json)?)
}

fn run_initializer(config: ThemeConfig) -> Result<bool, JsValue> {
    let page = Page::current()?;
    let scheme = MediaScheme::new(page.window.clone());
    let mut store = page.store(config)?;
    Ok(initialize(&mut store, &scheme)?.is_dark())
}

fn run_binding(config: ThemeConfig) -> Result<bool, JsValue> {
    let page = Page::current()?;
    let lookup = DomControls::new(page.document.clone());
    let store = page.store(config)?;
    Ok(bind_toggle(&lookup, store)?.is_some())
}
