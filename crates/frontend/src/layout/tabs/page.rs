//! TabPage component - wrapper для отображения контента таба
//!
//! Отвечает за:
//! - Показ/скрытие контента в зависимости от активности таба
//! - Логирование создания/уничтожения для отладки

use super::registry::render_tab_content;
use crate::layout::global_context::AppGlobalContext;
use contracts::shared::tab_descriptor::TabDescriptor;
use leptos::logging::log;
use leptos::prelude::*;

/// Компонент-обёртка для отдельного таба.
///
/// Видимость управляется CSS class `tabs__item--hidden`: контент неактивных
/// табов остаётся смонтированным.
#[component]
pub fn TabPage(tab: TabDescriptor, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let tab_key_for_active_check = tab_key.clone();

    let is_active = move || {
        tabs_store
            .active
            .with(|active| active.as_ref() == Some(&tab_key_for_active_check))
    };

    log!("🔨 TabPage CREATED for: '{}'", tab_key);

    let tab_key_for_cleanup = tab_key.clone();
    on_cleanup(move || {
        log!("💥 TabPage DESTROYED for: '{}'", tab_key_for_cleanup);
    });

    let content = render_tab_content(&tab);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}
