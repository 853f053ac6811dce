//! # salesdash
//!
//! Leptos + WASM frontend for the e-commerce sales dashboard. Access is
//! gated twice: the visitor must be authenticated, and for most routes must
//! hold an active paid subscription.
//!
//! The crate splits into the session core — durable storage
//! ([`util::storage`]), in-memory session state ([`state::session`]), the
//! route access decision layer ([`state::access`]), and the sales API
//! client ([`net::api`]) — plus the pages and components wired up in
//! [`app`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
