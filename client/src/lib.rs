//! # client
//!
//! Leptos + WASM frontend for the activity board.
//!
//! This crate contains the page, components, reactive state, and REST helpers
//! for listing extracurricular activities, signing participants up, and
//! unregistering them. The server renders the shell with the `ssr` feature;
//! the browser build (`hydrate`) takes over and performs all API calls.

pub mod app;
pub mod components;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
