pub mod center;
pub mod global_context;
pub mod tabs;

use leptos::prelude::*;

/// Оболочка приложения: панель вкладок и область контента.
///
/// ```text
/// +------------------------------------------+
/// |  tabs-bar                                |
/// +------------------------------------------+
/// |  Center (контент активной вкладки)       |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <div class="app-main">
                <center::Center>
                    {center()}
                </center::Center>
            </div>
        </div>
    }
}
