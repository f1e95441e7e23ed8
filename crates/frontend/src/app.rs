use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::Shell;
use crate::system::custom_tab::CUSTOM_TAB_KEY;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let tabs_store = AppGlobalContext::new();
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(tabs_store);

    tabs_store.open_tab(CUSTOM_TAB_KEY, tab_label_for_key(CUSTOM_TAB_KEY));
    // ?active=... wins over the default tab
    tabs_store.init_router_integration();

    view! {
        <Shell center=|| view! { <Tabs /> }.into_any() />
    }
}
