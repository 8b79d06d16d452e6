//! Theme preference and its stored string encoding.
//!
//! The stored form is the string `"true"` (dark) or `"false"` (light).
//! Parsing is total: only the exact string `"true"` reads as dark, and every
//! other value falls back to [`Theme::FALLBACK`].

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use crate::consts::{STORED_DARK, STORED_LIGHT};

/// Visual theme applied to the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    /// Theme used for any stored value other than `"true"`.
    pub const FALLBACK: Theme = Theme::Light;

    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    /// Interpret a stored string. Exactly `"true"` is dark; anything else,
    /// including `"false"`, `"TRUE"` and `""`, is [`Theme::FALLBACK`].
    #[must_use]
    pub fn parse_stored(raw: &str) -> Self {
        if raw == STORED_DARK { Theme::Dark } else { Self::FALLBACK }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Canonical stored form: `"true"` or `"false"`.
    #[must_use]
    pub fn as_stored(self) -> &'static str {
        match self {
            Theme::Dark => STORED_DARK,
            Theme::Light => STORED_LIGHT,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => f.write_str("dark"),
            Theme::Light => f.write_str("light"),
        }
    }
}
