//! # client
//!
//! Leptos frontend for the cookbook viewer and the assistant chat.
//!
//! The document model (`cookbook`) and the chat wire model (`frames`) are
//! plain Rust crates; this crate binds them to signals, the DOM and the
//! network. Browser-only glue is gated behind the `hydrate` feature and
//! degrades to no-ops during server rendering.

pub mod app;
pub mod components;
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
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
