use serde::{Deserialize, Serialize};

/// Описание вкладки, которое хост передаёт компоненту вкладки.
///
/// Хост владеет значением; компоненты только читают его.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDescriptor {
    /// Ключ вкладки в реестре (у внешних хостов поле называется `name`)
    #[serde(default, alias = "name")]
    pub key: String,
    /// Заголовок, который показывается пользователю
    pub title: String,
}

impl TabDescriptor {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
        }
    }
}
