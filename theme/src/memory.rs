//! In-memory capability implementations.
//!
//! Each type is a cheap handle over shared `Rc<RefCell<_>>` state: clones see
//! the same storage, class list, or handler slot. Hand one clone to the
//! theme logic and keep another to observe or drive it. Used by the tests
//! and by any non-browser host embedding the logic.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::error::ThemeError;
use crate::ports::{
    ActivationHandler, ActivationTarget, ControlLookup, PreferenceStorage, SystemSchemePreference,
    ThemeMarkerSink,
};

// =============================================================================
// STORAGE
// =============================================================================

#[derive(Debug, Default)]
struct StorageState {
    entries: HashMap<String, String>,
    unreadable: bool,
    read_only: bool,
}

/// `localStorage` stand-in.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    state: Rc<RefCell<StorageState>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.state.borrow_mut().entries.insert(key.to_string(), value.to_string());
        storage
    }

    /// Current value for `key`, bypassing failure simulation.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.state.borrow().entries.get(key).cloned()
    }

    /// Make every subsequent read fail.
    pub fn set_unreadable(&self, unreadable: bool) {
        self.state.borrow_mut().unreadable = unreadable;
    }

    /// Make every subsequent write fail.
    pub fn set_read_only(&self, read_only: bool) {
        self.state.borrow_mut().read_only = read_only;
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        let state = self.state.borrow();
        if state.unreadable {
            return Err(ThemeError::Storage(format!("read of {key} denied")));
        }
        Ok(state.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        let mut state = self.state.borrow_mut();
        if state.read_only {
            return Err(ThemeError::Storage(format!("write of {key} denied")));
        }
        state.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// ROOT MARKERS
// =============================================================================

/// Class list of a stand-in `<html>` element.
#[derive(Debug, Clone, Default)]
pub struct MemoryMarkers {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl MemoryMarkers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Class list starting with `classes` present.
    #[must_use]
    pub fn with_classes(classes: &[&str]) -> Self {
        let markers = Self::new();
        markers.classes.borrow_mut().extend(classes.iter().map(|c| (*c).to_string()));
        markers
    }

    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    /// Snapshot of the current classes in sorted order.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl ThemeMarkerSink for MemoryMarkers {
    fn set_marker(&mut self, class: &str, present: bool) -> Result<(), ThemeError> {
        let mut classes = self.classes.borrow_mut();
        if present {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
        Ok(())
    }

    fn has_marker(&self, class: &str) -> Result<bool, ThemeError> {
        Ok(self.contains(class))
    }
}

// =============================================================================
// SYSTEM SCHEME
// =============================================================================

/// Fixed answer to the color-scheme query; `None` simulates a host where the
/// query cannot be evaluated.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedScheme {
    pub prefers_dark: Option<bool>,
}

impl FixedScheme {
    #[must_use]
    pub fn dark() -> Self {
        Self { prefers_dark: Some(true) }
    }

    #[must_use]
    pub fn light() -> Self {
        Self { prefers_dark: Some(false) }
    }

    #[must_use]
    pub fn unavailable() -> Self {
        Self { prefers_dark: None }
    }
}

impl SystemSchemePreference for FixedScheme {
    fn prefers_dark(&self, query: &str) -> Result<bool, ThemeError> {
        self.prefers_dark
            .ok_or_else(|| ThemeError::SchemeQuery(format!("{query} not supported")))
    }
}

// =============================================================================
// CONTROLS
// =============================================================================

/// Stand-in for a clickable element holding at most one handler.
#[derive(Clone, Default)]
pub struct MemoryControl {
    handler: Rc<RefCell<Option<ActivationHandler>>>,
}

impl MemoryControl {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_handler(&self) -> bool {
        self.handler.borrow().is_some()
    }

    /// Simulate a click. Returns `false` when no handler is installed.
    #[must_use]
    pub fn activate(&self) -> bool {
        match self.handler.borrow_mut().as_mut() {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for MemoryControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryControl").field("has_handler", &self.has_handler()).finish()
    }
}

impl ActivationTarget for MemoryControl {
    fn on_activate(&mut self, handler: ActivationHandler) -> Result<(), ThemeError> {
        *self.handler.borrow_mut() = Some(handler);
        Ok(())
    }
}

/// Stand-in document: elements addressable by id.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    controls: HashMap<String, MemoryControl>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element with `id` and return a handle to it.
    pub fn add_control(&mut self, id: &str) -> MemoryControl {
        self.controls.entry(id.to_string()).or_default().clone()
    }

    /// Number of elements that currently hold a handler.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.controls.values().filter(|c| c.has_handler()).count()
    }
}

impl ControlLookup for MemoryDocument {
    type Control = MemoryControl;

    fn control_by_id(&self, id: &str) -> Option<MemoryControl> {
        self.controls.get(id).cloned()
    }
}
