//! Browser client for a two-step MFA login portal.
//!
//! ARCHITECTURE
//! ============
//! `pages` owns flow orchestration, `net` the authentication-service calls,
//! `state` the panel/message types, `components` shared rendering pieces, and
//! `util` pure helpers. Browser-only code sits behind the `hydrate` feature
//! so the crate builds and unit-tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook, enable console logging, and
/// mount the app into the document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
