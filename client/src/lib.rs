//! # realestate-client
//!
//! Leptos + WASM frontend for the real-estate marketplace.
//!
//! The core is the session store (`state::session`), the role guard
//! (`util::guard`) applied by the route outlet on every navigation, and the
//! shared search text (`state::search`). Pages call the REST backend through
//! `net::api`.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
