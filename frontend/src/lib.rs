//! WASM entry point for the StoryMaster landing page.
//!
//! Build and serve with `trunk serve` from this directory.

use app::App;
use wasm_bindgen::prelude::*;

/// Log level for the browser console.
fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Initialize logging and mount the app.
///
/// Sets up the panic hook for readable errors in the console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed, e.g. after a hot reload.
    if let Err(err) = console_log::init_with_level(log_level()) {
        leptos::logging::warn!("console logger not installed: {err}");
    }

    log::info!("mounting StoryMaster v{}", env!("CARGO_PKG_VERSION"));
    leptos::mount::mount_to_body(App);
}
