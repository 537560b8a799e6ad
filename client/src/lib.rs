//! # client
//!
//! Leptos + WASM frontend for the space rental listings API.
//!
//! This crate contains the listing grid, the create-listing form, their
//! state machines, and a thin REST layer. State and formatting modules are
//! plain Rust so they are unit-tested natively; browser-only code is gated
//! behind the `csr` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
