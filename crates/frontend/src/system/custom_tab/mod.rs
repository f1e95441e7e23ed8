//! Custom tab - статическая справочная вкладка об интеграции Genesys Cloud → Amazon EventBridge.
//!
//! Содержит:
//! - `info_panel` - `InfoPanel`, пишет разметку вкладки в поверхность отображения
//! - `surface` - трейт `DisplaySurface` и его реализации (DOM-элемент, память)
//! - `markup` - фиксированная разметка и ссылки на документацию
//! - `ui` - Leptos-компонент для реестра табов
//! - `wasm_api` - класс `CustomTab` для JS-хостов

pub mod error;
pub mod info_panel;
pub mod markup;
pub mod surface;
pub mod ui;
pub mod wasm_api;

/// Ключ вкладки в реестре табов
pub const CUSTOM_TAB_KEY: &str = "custom_tab";

pub use error::InvalidReferenceError;
pub use info_panel::{InfoPanel, Panel};
pub use surface::{DisplaySurface, MemorySurface};
pub use ui::CustomTabPage;
pub use wasm_api::CustomTab;
