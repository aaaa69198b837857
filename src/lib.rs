//! # soil-analyzer-client
//!
//! Leptos + WASM frontend for the SoilAnalyzer soil-analysis service.
//! Replaces the templated JavaScript pages with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, the REST
//! client, and session management (token persistence, route guarding,
//! and background token refresh). All browser-facing code is gated
//! behind the `hydrate` feature so the pure logic builds and tests
//! natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
