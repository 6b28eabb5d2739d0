//! SnapMoments site: single-page Leptos app rendered on the client.

pub mod app;
pub mod domain;
pub mod layout;
pub mod pages;
pub mod routes;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Debug builds log navigation and admin mock actions; release keeps submissions only
const LOG_LEVEL: log::Level = if cfg!(debug_assertions) {
    log::Level::Debug
} else {
    log::Level::Info
};

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(LOG_LEVEL);
    console_error_panic_hook::set_once();

    log::info!("{} starting", contracts::shared::site_info::SITE.brand);
    leptos::mount::mount_to_body(app::App);
}
