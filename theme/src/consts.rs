//! Names shared with the page's HTML and stylesheet.

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding `"true"` (dark) or `"false"` (light).
pub const STORAGE_KEY: &str = "darkmode";

/// Stored form of a dark preference.
pub const STORED_DARK: &str = "true";

/// Stored form of a light preference.
pub const STORED_LIGHT: &str = "false";

// ── Root markers ────────────────────────────────────────────────

/// Class on `<html>` while the dark theme is forced.
pub const DARK_CLASS: &str = "forcedark";

/// Class on `<html>` while the light theme is forced.
pub const LIGHT_CLASS: &str = "forcelight";

// ── Page hooks ──────────────────────────────────────────────────

/// Id of the optional toggle button.
pub const TOGGLE_BUTTON_ID: &str = "toggle-dark-mode-button";

/// Media query for the system dark color scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
