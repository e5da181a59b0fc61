//! # bank-client
//!
//! WASM page controller for the banking demo. The server renders the
//! login, signup and account pages; this crate attaches submit listeners to
//! their forms, posts the fields with `fetch`, and renders the outcome into
//! the page or navigates away.
//!
//! Decisions live in `controller`, `pages`, `state` and `util` and compile
//! natively. The browser side (`dom`, `net::browser`, `start`) is behind
//! the `hydrate` feature.

pub mod config;
pub mod controller;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Module entry point: set up panic reporting and logging, load config,
/// and wire the current page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let loaded = config::ClientConfig::from_document();
    let level = loaded
        .as_ref()
        .ok()
        .and_then(|cfg| cfg.level().ok())
        .unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("ignoring embedded client config: {e}");
        config::ClientConfig::default()
    });
    dom::init(std::rc::Rc::new(config));
}
