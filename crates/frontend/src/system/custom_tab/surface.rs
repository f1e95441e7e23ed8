//! Поверхности отображения, в которые пишется разметка вкладки.

use std::cell::RefCell;

/// Узел UI, содержимое которого можно целиком заменить.
///
/// `&self`: UI-хэндлы разделяемые, запись идёт через внутреннюю изменяемость.
pub trait DisplaySurface {
    fn replace_content(&self, markup: &str);
}

impl DisplaySurface for web_sys::Element {
    fn replace_content(&self, markup: &str) {
        self.set_inner_html(markup);
    }
}

/// Поверхность в памяти - для хостов без DOM и для тестов.
#[derive(Debug, Default)]
pub struct MemorySurface {
    content: RefCell<String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: RefCell::new(content.into()),
        }
    }

    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }
}

impl DisplaySurface for MemorySurface {
    fn replace_content(&self, markup: &str) {
        let mut content = self.content.borrow_mut();
        content.clear();
        content.push_str(markup);
    }
}
