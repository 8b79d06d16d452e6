//! Capability traits for the browser state the theme logic touches.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page exposes three shared channels: a `localStorage` entry, the class
//! list of `<html>`, and the `prefers-color-scheme` media query. The toggle
//! additionally needs to find one element by id and attach a click handler.
//! Each concern is a trait so the logic runs against [`crate::memory`] in
//! tests and against `web-sys` in the browser.

use crate::error::ThemeError;

/// Durable string key/value storage scoped to the page origin.
pub trait PreferenceStorage {
    /// Read the value for `key`, `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage rejects the write.
    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// Class list of the document root element.
pub trait ThemeMarkerSink {
    /// Add `class` when `present`, remove it otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the class list cannot be updated.
    fn set_marker(&mut self, class: &str, present: bool) -> Result<(), ThemeError>;

    /// Whether `class` is currently on the root element.
    ///
    /// # Errors
    ///
    /// Returns an error if the class list cannot be read.
    fn has_marker(&self, class: &str) -> Result<bool, ThemeError>;
}

/// The environment's reported color-scheme preference.
pub trait SystemSchemePreference {
    /// Whether `query` (a `prefers-color-scheme` media query) matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot be evaluated.
    fn prefers_dark(&self, query: &str) -> Result<bool, ThemeError>;
}

/// Handler invoked once per activation of a control.
pub type ActivationHandler = Box<dyn FnMut()>;

/// An interactive element that can run a handler on activation.
pub trait ActivationTarget {
    /// Install `handler` as the element's activation handler, replacing any
    /// handler installed before.
    ///
    /// # Errors
    ///
    /// Returns an error if the handler cannot be attached.
    fn on_activate(&mut self, handler: ActivationHandler) -> Result<(), ThemeError>;
}

/// Lookup of interactive elements by id.
pub trait ControlLookup {
    type Control: ActivationTarget;

    /// Find the element with `id`, `None` when the page has no such element.
    fn control_by_id(&self, id: &str) -> Option<Self::Control>;
}
