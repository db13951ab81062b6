pub mod api;
pub mod common;
pub mod config;
pub mod content;
pub mod frontend;
pub mod i18n;
pub mod models;
pub mod routing;
pub mod services;
pub mod types;

/// WASM entry point for the client-rendered bundle
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    match frontend::Services::connect() {
        Ok(services) => leptos::mount::mount_to_body(move || {
            leptos::view! { <frontend::App services=services /> }
        }),
        Err(e) => log::error!("Could not start RobotTrader: {}", e),
    }
}
