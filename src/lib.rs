//! Genie Waitlist - early access landing page
//!
//! Email capture for the Genie waitlist, built with Leptos and WebAssembly
//! on the client and axum on the server.

#![recursion_limit = "256"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
