//! # client
//!
//! Leptos + WASM frontend for the Elvang warehouse management system.
//!
//! This crate contains pages, components, application state, the session
//! gate, and the typed REST client for the warehouse backend. The host
//! binary server-renders `app::shell` and ships this crate as the hydrated
//! bundle.

pub mod app;
pub mod components;
pub mod consts;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger not installed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
