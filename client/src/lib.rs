//! # client
//!
//! Leptos + WASM frontend for batch CVE exploit prediction.
//!
//! Users describe up to three vulnerability records through tab-group
//! controls; every change re-submits the whole batch to the prediction
//! service and the aligned results are rendered next to the forms.
//!
//! `state` holds the host-testable state machines, `components` and `pages`
//! render them, `net` talks to the prediction service.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
