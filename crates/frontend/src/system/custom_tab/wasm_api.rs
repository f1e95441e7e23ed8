//! Класс `CustomTab` для JS-хостов: `new CustomTab(tab, el).render()`.

use super::info_panel::{InfoPanel, Panel};
use contracts::shared::tab_descriptor::TabDescriptor;
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen(js_name = CustomTab)]
pub struct CustomTab {
    tab: TabDescriptor,
    el: Option<Element>,
}

#[wasm_bindgen(js_class = CustomTab)]
impl CustomTab {
    /// `tab` - объект с полем `title`; `el` - контейнер вкладки (может быть `null`).
    #[wasm_bindgen(constructor)]
    pub fn new(tab: JsValue, el: Option<Element>) -> Result<CustomTab, JsValue> {
        let tab: TabDescriptor = serde_wasm_bindgen::from_value(tab)
            .map_err(|err| JsValue::from_str(&format!("Invalid tab descriptor: {}", err)))?;
        Ok(Self { tab, el })
    }

    /// Бросает `InvalidReferenceError`, если контейнер не передан.
    pub fn render(&self) -> Result<(), JsValue> {
        InfoPanel::new(&self.tab, self.el.as_ref())
            .render()
            .map_err(|err| {
                log::error!("{}", err);
                JsValue::from_str(&err.to_string())
            })
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.tab.title.clone()
    }
}
