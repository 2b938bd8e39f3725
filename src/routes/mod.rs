//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the icon and survey APIs, serves icon and illustration
//! assets as static files, and stitches in Leptos SSR rendering under a
//! single Axum router.

pub mod icons;
pub mod survey;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::StartupError;
use crate::state::AppState;

/// API routes shared by the SSR app and external consumers.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/icons", get(icons::list_icons))
        .route("/api/icons/{name}", get(icons::render_icon))
        .route("/api/survey", post(survey::submit))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Static asset routes: `/icons/<file>.svg` and `/illustrations/<1x|2x>/<file>.png`.
fn asset_routes(state: &AppState) -> Router {
    Router::new()
        .nest_service("/icons", ServeDir::new(state.assets_dir.join("icons")))
        .nest_service("/illustrations", ServeDir::new(state.illustrations_dir()))
}

/// Full application: API + static assets + Leptos SSR pages.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, StartupError> {
    let conf = get_configuration(None).map_err(|e| StartupError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(haven_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || haven_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(asset_routes(&state)
        .merge(api_routes(state))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
