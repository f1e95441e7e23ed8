//! Tab content registry - единственный источник правды для маппинга tab.key → View

use crate::system::custom_tab::{CustomTabPage, CUSTOM_TAB_KEY};
use contracts::shared::tab_descriptor::TabDescriptor;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент таба по его описанию.
///
/// # Returns
/// AnyView с содержимым таба или placeholder для неизвестных ключей
pub fn render_tab_content(tab: &TabDescriptor) -> AnyView {
    match tab.key.as_str() {
        CUSTOM_TAB_KEY => {
            log!("✅ Creating CustomTabPage");
            view! { <CustomTabPage descriptor=tab.clone() /> }.into_any()
        }
        other => {
            log!("⚠️ Unknown tab type: {}", other);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
