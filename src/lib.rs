//! # lcbad
//!
//! Leptos + WASM frontend for the "Life Could Be A Dream" story site.
//! Every page except sign-in is wrapped in a session gate driven by the
//! `gate` crate; the rest is static content plus two simulated chat demos.
//!
//! This crate contains the app shell, pages, components, client state,
//! the demo auth provider, and browser utilities. It is rendered entirely
//! in the browser; there is no server.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and the panic hook, then mount `App`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    // Only fails if a logger is already installed.
    console_log::init_with_level(log::Level::Debug).ok();
    leptos::mount::mount_to_body(app::App);
}
