//! Theme store: the persisted preference and the root markers as one unit.
//!
//! DESIGN
//! ======
//! Both the initializer and the toggle write the same pair of channels. All
//! writes go through [`ThemeStore::set_preference`], which updates both
//! markers and then the stored string, so the marker invariant (exactly one
//! of dark/light present) and the canonical encoding live in one place.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::ports::{PreferenceStorage, ThemeMarkerSink};
use crate::preference::Theme;

pub struct ThemeStore<S, M> {
    storage: S,
    markers: M,
    config: ThemeConfig,
}

impl<S: PreferenceStorage, M: ThemeMarkerSink> ThemeStore<S, M> {
    pub fn new(storage: S, markers: M, config: ThemeConfig) -> Self {
        Self { storage, markers, config }
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Raw stored value. Empty strings count as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn stored(&self) -> Result<Option<String>, ThemeError> {
        let raw = self.storage.read(&self.config.storage_key)?;
        Ok(raw.filter(|v| !v.is_empty()))
    }

    /// Whether the dark marker is on the root element.
    ///
    /// This reads the DOM, not storage: the markers are what the page is
    /// currently showing.
    ///
    /// # Errors
    ///
    /// Returns an error if the class list cannot be read.
    pub fn get_preference(&self) -> Result<bool, ThemeError> {
        self.markers.has_marker(&self.config.dark_class)
    }

    /// Current theme as shown by the root markers.
    ///
    /// # Errors
    ///
    /// Returns an error if the class list cannot be read.
    pub fn current(&self) -> Result<Theme, ThemeError> {
        self.get_preference().map(Theme::from_dark)
    }

    /// Apply `dark` to both markers, then persist its stored form.
    ///
    /// # Errors
    ///
    /// Returns the first marker or storage failure. Markers are written
    /// before storage, so a storage failure leaves the page showing the new
    /// theme.
    pub fn set_preference(&mut self, dark: bool) -> Result<(), ThemeError> {
        let theme = Theme::from_dark(dark);
        self.apply_markers(theme)?;
        self.persist(theme)
    }

    /// Put exactly one of the dark/light markers on the root element.
    ///
    /// # Errors
    ///
    /// Returns an error if the class list cannot be updated.
    pub fn apply_markers(&mut self, theme: Theme) -> Result<(), ThemeError> {
        let dark = theme.is_dark();
        self.markers.set_marker(&self.config.dark_class, dark)?;
        self.markers.set_marker(&self.config.light_class, !dark)
    }

    /// Write the canonical stored form of `theme`.
    ///
    /// # Errors
    ///
    /// Returns an error if storage rejects the write.
    pub fn persist(&mut self, theme: Theme) -> Result<(), ThemeError> {
        self.storage.write(&self.config.storage_key, theme.as_stored())
    }
}
