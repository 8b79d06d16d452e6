//! Dark/light theme selection for static web pages.
//!
//! This crate is compiled to WebAssembly and runs in the page. It decides the
//! initial theme before content paints, keeps two mutually exclusive marker
//! classes on the `<html>` element in sync with a persisted preference, and
//! flips both when the user clicks the toggle button.
//!
//! Browser state is reached only through the capability traits in
//! [`ports`], so the logic runs natively in tests against the in-memory
//! implementations in [`memory`]. The `web-sys` adapters and the
//! `wasm-bindgen` exports live in `web` behind the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`preference`] | [`preference::Theme`] and the stored-string encoding |
//! | [`store`] | [`store::ThemeStore`]: storage + marker synchronization |
//! | [`initializer`] | Page-load theme decision |
//! | [`toggle`] | Toggle button binding and activation |
//! | [`ports`] | Capability traits for storage, markers, scheme query, controls |
//! | [`memory`] | In-memory capability implementations |
//! | [`config`] | [`config::ThemeConfig`] with JSON overrides |
//! | [`error`] | [`error::ThemeError`] |
//! | [`consts`] | Storage key, class names, element id, media query |

pub mod config;
pub mod consts;
pub mod error;
pub mod initializer;
pub mod memory;
pub mod ports;
pub mod preference;
pub mod store;
pub mod toggle;

#[cfg(feature = "hydrate")]
pub mod web;

pub use config::ThemeConfig;
pub use error::ThemeError;
pub use initializer::initialize;
pub use preference::Theme;
pub use store::ThemeStore;
pub use toggle::{ToggleController, bind_toggle};
