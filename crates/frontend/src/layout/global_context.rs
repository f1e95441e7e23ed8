use crate::layout::tabs::tab_label_for_key;
use contracts::shared::tab_descriptor::TabDescriptor;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Хранилище открытых вкладок, раздаётся через context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<TabDescriptor>>,
    pub active: RwSignal<Option<String>>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
        }
    }

    /// Восстанавливает активную вкладку из `?active=<key>` и дальше держит URL в синхронизации.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(active_key) = active_key_from_query(&search) {
            self.open_tab(&active_key, resolve_title(&active_key));
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let new_url = query_for_active(&active_key);
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("🔷 open_tab: key='{}', title='{}'", key, title);
        self.opened.update(|tabs| {
            if push_unique(tabs, TabDescriptor::new(key, title)) {
                leptos::logging::log!("✅ Tab added. Total tabs: {}", tabs.len());
            }
        });
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        leptos::logging::log!("🔶 activate_tab: key='{}'", key);
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("🔴 close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            leptos::logging::log!("➡️ Next active tab: {:?}", next_active);
            self.active.set(next_active);
        }
    }
}

/// Добавляет вкладку, если вкладки с таким ключом ещё нет.
fn push_unique(tabs: &mut Vec<TabDescriptor>, tab: TabDescriptor) -> bool {
    if tabs.iter().any(|t| t.key == tab.key) {
        return false;
    }
    tabs.push(tab);
    true
}

fn resolve_title(key: &str) -> &str {
    match tab_label_for_key(key) {
        "" => key,
        label => label,
    }
}

fn active_key_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").filter(|key| !key.is_empty()).cloned()
}

fn query_for_active(key: &str) -> String {
    let query_string =
        serde_qs::to_string(&HashMap::from([("active", key)])).unwrap_or_default();
    format!("?{}", query_string)
}
