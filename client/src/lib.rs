//! # asma-storefront
//!
//! Leptos frontend for the ASMA kitchen-design site: informational pages,
//! the Book Now catalog with its session-scoped cart, the reservation and
//! design-request forms, the sign-in modal, and the admin tables.
//!
//! Compiled twice: with `ssr` for the Axum host in `server/`, and with
//! `hydrate` to WASM for the browser. Domain state lives in `state` as plain
//! Rust so it can be tested without either.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console_log init failed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
