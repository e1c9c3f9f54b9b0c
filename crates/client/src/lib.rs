use console_error_panic_hook::set_once as set_panic_hook;
use leptos::{mount_to_body, view};
use shared::utils::tracing::configure_tracing_once;
use tracing::info;
use wasm_bindgen::prelude::wasm_bindgen;

mod components;
use components::App;

mod routes;
pub use routes::*;

pub mod api;

#[wasm_bindgen(start)]
pub fn start_client() {
    set_panic_hook();
    configure_tracing_once();

    info!("Starting plans admin {}", env!("CARGO_PKG_VERSION"));

    mount_to_body(|| view! { <App/> });
}
