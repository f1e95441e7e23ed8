pub mod app;
pub mod layout;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

pub use system::custom_tab::{CustomTab, InfoPanel, Panel};

/// Монтирует самостоятельную оболочку с вкладками в `<body>`.
///
/// Внешние хосты, которым нужен только класс `CustomTab`, её не вызывают.
#[wasm_bindgen]
pub fn hydrate() {
    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}
