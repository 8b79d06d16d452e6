//! Errors produced by theme capabilities.
//!
//! None of these reach the page as exceptions on the startup path: the
//! initializer and the click handler log them and carry on. They exist so
//! adapters can propagate host failures with `?` instead of discarding them.

/// Errors produced by theme operations and browser adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// The origin has no usable `localStorage` (disabled, sandboxed, ...).
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A storage read or write failed.
    #[error("storage access failed: {0}")]
    Storage(String),

    /// The root element's class list could not be read or updated.
    #[error("root marker update failed: {0}")]
    Markers(String),

    /// The system color-scheme query could not be evaluated.
    #[error("color scheme query failed: {0}")]
    SchemeQuery(String),

    /// No window, document, or document element is reachable.
    #[error("document unavailable")]
    DocumentUnavailable,

    /// A configuration value is missing or invalid.
    #[error("invalid theme config: {0}")]
    Config(String),
}
