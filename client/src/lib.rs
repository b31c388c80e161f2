//! # client
//!
//! Leptos + WASM front end for the school-class Telegram web app.
//!
//! This crate contains the panels, components, view state, session config,
//! and the data-access layer that talks either to the live bot API or to a
//! browser-local mock store.

pub mod app;
pub mod components;
pub mod config;
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
