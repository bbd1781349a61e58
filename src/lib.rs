//! VIA Pets Showcase WASM Module
//!
//! Renders the adoption cards and the kennel free-space count on the VIA Pets
//! website from the static files the shop application exports.

pub mod api;
pub mod config;
pub mod dom;
pub mod errors;
pub mod fetch;
pub mod models;
pub mod parse;
pub mod renderers;
pub mod showcase;
pub mod utils;

// Re-export commonly used types
pub use config::ShowcaseConfig;
pub use errors::*;
pub use models::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("VIA Pets showcase WASM module initialized");

    #[cfg(feature = "autostart")]
    showcase::launch(ShowcaseConfig::default());
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("[WASM] logger already set: {}", err).into());
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
