//! VIA Pets showcase WASM API
//!
//! This module provides the JavaScript-facing API for the website.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, config decoding and error conversion
//! - `showcase`: entry points for the pet list and free-space routines

pub mod helpers;
pub mod showcase;

pub use showcase::{
    display_free_space, display_pets, render_pet_cards, start_showcase, start_showcase_from_yaml,
    start_showcase_with_config,
};
