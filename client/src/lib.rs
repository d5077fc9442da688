//! # client
//!
//! Leptos + WASM frontend for The Coordinate: home, sign-in, sign-up and a
//! dashboard gated behind Google sign-in.
//!
//! Authentication and profile storage belong to Firebase. This crate keeps a
//! local session mirrored from the provider's auth-state stream, guards
//! routes on it, and writes the user's profile once at sign-up.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    log::info!("hydrating app");
    leptos::mount::hydrate_body(app::App);
}
