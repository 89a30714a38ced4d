//! # casebook
//!
//! Leptos + WASM client for managing Gherkin test cases behind a
//! third-party identity provider. Routes cover a public home page,
//! provider-hosted sign-in/sign-up widgets, a session-gated dashboard,
//! and a creation form; records live behind a JSON REST API at
//! `/api/v1/testcases/`.
//!
//! Browser-only code (HTTP, the identity SDK bridge, the entry point) is
//! gated behind the `csr` feature so the crate compiles natively and unit
//! tests run under plain `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: initialize diagnostics, build the startup
/// configuration, and mount the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
fn start() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = config::AppConfig::from_build_env();
    leptos::mount::mount_to_body(move || {
        view! { <app::App config=config.clone()/> }
    });
}
