//! # changeboard
//!
//! Leptos + WASM front end for the change-management tracker: an editable
//! table of scheduled service changes, passkey-gated editing, timezone
//! conversion, history snapshots, and an AI assistant over a server API.
//!
//! The pure state machines live in `state` and `util` and compile natively so
//! they can be tested without a browser. Everything that touches the DOM,
//! `localStorage`, timers, or HTTP is gated behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and mounts the root component.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
