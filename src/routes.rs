//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The demo page, its stylesheet, and the wasm bundle are plain static files.
//! The host never looks at the theme; it only serves the directory and a
//! health check.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;

pub fn app(config: &SiteConfig) -> Router {
    let site = ServeDir::new(&config.site_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
