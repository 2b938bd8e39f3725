//! # haven-client
//!
//! Leptos + WASM front-end for the Haven component playground.
//!
//! This crate contains the icon and illustration components, the
//! chat → loading → results view-state machine used by the matching
//! prototype, and the satisfaction survey widget. Icon resolution, parsing
//! and recoloring live in `haven-icons`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
