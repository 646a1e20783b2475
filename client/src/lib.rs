//! # client
//!
//! Leptos + WASM frontend for the two drag-and-drop demos: the drop zone and
//! the canvas page builder. The builder delegates all interaction state to the
//! `canvas` crate's [`canvas::engine::Engine`]; this crate only maps DOM events
//! onto engine calls and engine state onto elements.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: route logs to the browser console and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
