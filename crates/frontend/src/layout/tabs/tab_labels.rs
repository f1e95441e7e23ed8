//! Tab labels - единственный источник правды для заголовков табов.

use crate::system::custom_tab::CUSTOM_TAB_KEY;

/// Возвращает читаемый заголовок таба для данного ключа.
///
/// Fallback: пустая строка (вызывающий решает, чем заменить).
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        CUSTOM_TAB_KEY => "AWS EventBridge",
        _ => "",
    }
}
