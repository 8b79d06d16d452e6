//! Page-load theme decision.
//!
//! Runs once, synchronously, before the body paints. The stored value wins
//! when present; otherwise the system color-scheme preference is used. The
//! chosen theme is applied to the root markers and written back, which turns
//! absent or malformed stored values into canonical `"true"`/`"false"`.

#[cfg(test)]
#[path = "initializer_test.rs"]
mod initializer_test;

use crate::error::ThemeError;
use crate::ports::{PreferenceStorage, SystemSchemePreference, ThemeMarkerSink};
use crate::preference::Theme;
use crate::store::ThemeStore;

/// Decide, apply, and persist the initial theme.
///
/// An unreadable storage counts as "nothing stored", an unanswerable scheme
/// query counts as "does not prefer dark", and a rejected write leaves the
/// markers applied. All three are logged.
///
/// # Errors
///
/// Returns an error only if the root markers cannot be updated.
pub fn initialize<S, M, P>(store: &mut ThemeStore<S, M>, scheme: &P) -> Result<Theme, ThemeError>
where
    S: PreferenceStorage,
    M: ThemeMarkerSink,
    P: SystemSchemePreference,
{
    let stored = store.stored().unwrap_or_else(|e| {
        log::warn!("theme: stored preference unreadable, using system preference: {e}");
        None
    });

    let theme = match stored {
        Some(raw) => Theme::parse_stored(&raw),
        None => Theme::parse_stored(&system_prefers_dark(store, scheme).to_string()),
    };

    store.apply_markers(theme)?;
    if let Err(e) = store.persist(theme) {
        log::warn!("theme: could not persist {theme}: {e}");
    }
    log::debug!("theme: initialized {theme}");
    Ok(theme)
}

fn system_prefers_dark<S, M, P>(store: &ThemeStore<S, M>, scheme: &P) -> bool
where
    S: PreferenceStorage,
    M: ThemeMarkerSink,
    P: SystemSchemePreference,
{
    let query = &store.config().dark_scheme_query;
    scheme.prefers_dark(query).unwrap_or_else(|e| {
        log::warn!("theme: {e}; defaulting to light");
        false
    })
}
