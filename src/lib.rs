//! Browser client for the portal: session state, guarded routing, and the
//! login/dashboard screens.
//!
//! ARCHITECTURE
//! ============
//! `app` wires the router and shared session context, `pages` own
//! route-level orchestration, `state` holds the shared session signal,
//! `util::guard` decides route access, and `net` talks to the server.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
