use super::info_panel::{InfoPanel, Panel};
use contracts::shared::tab_descriptor::TabDescriptor;
use leptos::prelude::*;

/// Вкладка со справкой по интеграции EventBridge.
///
/// Разметку пишет `InfoPanel` прямо в контейнер, как только тот смонтирован.
#[component]
pub fn CustomTabPage(descriptor: TabDescriptor) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |_| {
        let Some(container) = container_ref.get() else {
            return;
        };
        let element: &web_sys::Element = container.as_ref();
        if let Err(err) = InfoPanel::new(&descriptor, Some(element)).render() {
            log::error!("Failed to render custom tab: {}", err);
        }
    });

    view! {
        <div id="custom_tab--info" class="custom-tab" node_ref=container_ref></div>
    }
}
