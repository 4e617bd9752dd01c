//! # oj-client
//!
//! Leptos + WASM frontend for the OpenJudge platform: problem catalog,
//! submissions, forum, and news over a REST API.
//!
//! The only stateful piece is the session (`state::session`); it hydrates
//! from `localStorage` at startup and gates route access through the
//! navigation guard in `routes`. Everything else is declarative routing plus
//! typed pass-through API wrappers in `net`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entrypoint: install logging and mount the app over the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::hydrate_body(app::App);
}
