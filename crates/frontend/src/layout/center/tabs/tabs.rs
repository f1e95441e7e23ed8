use crate::layout::center::tabs::tab::Tab as TabComponent;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::TabPage;
use contracts::shared::tab_descriptor::TabDescriptor;
use leptos::logging::log;
use leptos::prelude::*;

/// Панель вкладок и контент открытых вкладок.
#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        view! { <TabComponent tab=tab /> }
                    }
                />
            </div>
            <div class="tab-content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabDescriptor| {
                        log!("👶 <For> children function called for: '{}'", tab.key);
                        view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    }
                />
            </div>
        </div>
    }
}
