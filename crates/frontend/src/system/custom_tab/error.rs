use thiserror::Error;

/// Поверхность отображения не задана на момент `render()`.
///
/// Ошибка программиста хоста: повтор не поможет, нужно передать элемент.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("InvalidReferenceError: {0} is not set")]
pub struct InvalidReferenceError(pub &'static str);
