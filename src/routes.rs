//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard shell is plain static HTML. It loads the theme toggle from
//! `/pkg` (the `wasm-bindgen` output of the `theme` crate) and its
//! stylesheets from `/static`. Everything else falls back to the static
//! directory so `/` resolves to `index.html`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;

pub fn app(config: &Config) -> Router {
    let site = ServeDir::new(&config.static_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
