//! # ifms-client
//!
//! Leptos + WASM front-end shell for the IFMS item and feedback system.
//!
//! This crate holds the backend API client, the persisted login session, and
//! the hash-based route table with its login guard. Pages are thin shells
//! over those three pieces.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
