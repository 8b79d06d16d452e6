//! Toggle button: flips the theme on each click.
//!
//! The current theme is taken from the dark marker on the root element, not
//! from storage. Pages without the button get no handler at all.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

use crate::error::ThemeError;
use crate::ports::{ActivationTarget, ControlLookup, PreferenceStorage, ThemeMarkerSink};
use crate::preference::Theme;
use crate::store::ThemeStore;

/// Activation logic owned by the button's click handler.
pub struct ToggleController<S, M> {
    store: ThemeStore<S, M>,
}

impl<S: PreferenceStorage, M: ThemeMarkerSink> ToggleController<S, M> {
    pub fn new(store: ThemeStore<S, M>) -> Self {
        Self { store }
    }

    /// Handle one click: negate the marker state, apply it, persist it.
    ///
    /// # Errors
    ///
    /// Returns an error if the markers cannot be read or written, or the
    /// new value cannot be stored.
    pub fn activate(&mut self) -> Result<Theme, ThemeError> {
        let next = self.store.current()?.toggled();
        self.store.set_preference(next.is_dark())?;
        Ok(next)
    }
}

/// Attach a [`ToggleController`] to the page's toggle button.
///
/// Returns `Ok(None)` without touching anything when no element carries the
/// configured id. Errors inside the click handler are logged, not raised.
///
/// # Errors
///
/// Returns an error if the element exists but the handler cannot be
/// attached.
pub fn bind_toggle<L, S, M>(lookup: &L, store: ThemeStore<S, M>) -> Result<Option<L::Control>, ThemeError>
where
    L: ControlLookup,
    S: PreferenceStorage + 'static,
    M: ThemeMarkerSink + 'static,
{
    let id = store.config().toggle_button_id.clone();
    let Some(mut control) = lookup.control_by_id(&id) else {
        log::debug!("theme: no #{id} on page; toggle not bound");
        return Ok(None);
    };

    let mut controller = ToggleController::new(store);
    control.on_activate(Box::new(move || match controller.activate() {
        Ok(theme) => log::debug!("theme: toggled to {theme}"),
        Err(e) => log::warn!("theme: toggle failed: {e}"),
    }))?;

    Ok(Some(control))
}
