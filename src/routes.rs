//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders the web app shell through Leptos SSR and serves the
//! hydrate bundle from the site root. All school data lives behind the
//! remote API or the in-browser mock store, so the host exposes no data
//! endpoints of its own.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Routes owned by the host itself.
pub fn host_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Serve compiled assets (WASM, JS, CSS) from `<site_root>/pkg`.
pub fn with_assets(router: Router, site_root: &Path) -> Router {
    router.nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
}

/// Full application router: host routes, Leptos SSR pages, and static assets.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = leptos_options.site_root.to_string();
    with_assets(host_routes().merge(leptos_router), Path::new(&site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
