//! Vexon Web Frontend
//!
//! Leptos-based WASM frontend. Pages talk to the backend through the shared
//! `ApiClient`; the session lives in browser local storage.

mod api;
mod app;
mod components;
mod pages;
mod storage;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
