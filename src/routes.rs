//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The demos are a client-side app, so the server only hands out the built
//! bundle. Unknown paths fall back to `index.html` so the client router can
//! resolve deep links such as `/builder`.

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Static bundle at `/`, health probe at `/healthz`.
pub fn app(site_root: &Path) -> Router {
    let index = ServeFile::new(site_root.join("index.html"));
    let site = ServeDir::new(site_root)
        .append_index_html_on_directories(true)
        .fallback(index);

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;
