use super::error::InvalidReferenceError;
use super::markup::render_markup;
use super::surface::DisplaySurface;
use contracts::shared::tab_descriptor::TabDescriptor;

/// Панель, которая умеет отрисовать себя в свою поверхность.
pub trait Panel {
    fn render(&self) -> Result<(), InvalidReferenceError>;
}

/// Справочная панель вкладки.
///
/// Держит ссылки на описание вкладки и поверхность, обе принадлежат хосту.
/// После создания ссылки не меняются; освобождать при закрытии нечего.
pub struct InfoPanel<'a, S: DisplaySurface + ?Sized> {
    descriptor: &'a TabDescriptor,
    surface: Option<&'a S>,
}

impl<'a, S: DisplaySurface + ?Sized> InfoPanel<'a, S> {
    /// Только запоминает ссылки, ничего не рисует.
    pub fn new(descriptor: &'a TabDescriptor, surface: Option<&'a S>) -> Self {
        Self {
            descriptor,
            surface,
        }
    }

    pub fn descriptor(&self) -> &TabDescriptor {
        self.descriptor
    }
}

impl<S: DisplaySurface + ?Sized> Panel for InfoPanel<'_, S> {
    /// Полностью заменяет содержимое поверхности разметкой вкладки.
    ///
    /// Без поверхности возвращает `InvalidReferenceError` и ничего не пишет.
    fn render(&self) -> Result<(), InvalidReferenceError> {
        let surface = self.surface.ok_or(InvalidReferenceError("display surface"))?;
        surface.replace_content(&render_markup(&self.descriptor.title));
        log::debug!(
            "Custom tab '{}' rendered (key='{}')",
            self.descriptor.title,
            self.descriptor.key
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::custom_tab::markup::{
        AVAILABLE_TOPICS_URL, EVENT_BRIDGE_CONFIGURATION_URL, EVENT_BRIDGE_URL,
        TERRAFORM_AUTOMATION_URL,
    };
    use crate::system::custom_tab::surface::MemorySurface;

    fn descriptor(title: &str) -> TabDescriptor {
        TabDescriptor::new("custom_tab", title)
    }

    /// Текст между всеми парами `open`…`close`
    fn between<'a>(html: &'a str, open: &str, close: &str) -> Vec<&'a str> {
        let mut found = Vec::new();
        let mut rest = html;
        while let Some(start) = rest.find(open) {
            let after = &rest[start + open.len()..];
            let Some(end) = after.find(close) else {
                break;
            };
            found.push(&after[..end]);
            rest = &after[end + close.len()..];
        }
        found
    }

    #[test]
    fn test_scenario_aws_eventbridge() {
        let tab = descriptor("AWS EventBridge");
        let surface = MemorySurface::new();

        InfoPanel::new(&tab, Some(&surface)).render().unwrap();

        let html = surface.content();
        let headings = between(&html, "<h2 style=\"margin-top: 20px\">", "</h2>");
        assert_eq!(headings, vec!["AWS EventBridge"]);
        assert_eq!(
            between(&html, "<li>", "</li>"),
            vec!["Lambda", "Kinesis", "SQS", "SNS"]
        );
    }

    #[test]
    fn test_title_appears_once_inside_heading() {
        let tab = descriptor("Genesys Events 42");
        let surface = MemorySurface::new();

        InfoPanel::new(&tab, Some(&surface)).render().unwrap();

        let html = surface.content();
        assert_eq!(html.matches("Genesys Events 42").count(), 1);
        assert_eq!(
            between(&html, "<h2 style=\"margin-top: 20px\">", "</h2>"),
            vec!["Genesys Events 42"]
        );
    }

    #[test]
    fn test_previous_content_is_discarded() {
        let tab = descriptor("AWS EventBridge");
        let surface = MemorySurface::with_content("<div id=\"stale\">loading…</div>");

        InfoPanel::new(&tab, Some(&surface)).render().unwrap();

        let html = surface.content();
        assert!(!html.contains("stale"));
        assert!(!html.contains("loading…"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let tab = descriptor("AWS EventBridge");
        let once = MemorySurface::new();
        let twice = MemorySurface::new();

        InfoPanel::new(&tab, Some(&once)).render().unwrap();
        let panel = InfoPanel::new(&tab, Some(&twice));
        panel.render().unwrap();
        panel.render().unwrap();

        assert_eq!(once.content(), twice.content());
    }

    #[test]
    fn test_links_point_to_documentation_only() {
        let tab = descriptor("AWS EventBridge");
        let surface = MemorySurface::new();

        InfoPanel::new(&tab, Some(&surface)).render().unwrap();

        let html = surface.content();
        let hrefs = between(&html, "<a href=\"", "\"");
        assert_eq!(
            hrefs,
            vec![
                AVAILABLE_TOPICS_URL,
                EVENT_BRIDGE_URL,
                EVENT_BRIDGE_CONFIGURATION_URL,
                TERRAFORM_AUTOMATION_URL,
            ]
        );
        for anchor in between(&html, "<a ", ">") {
            assert!(anchor.contains(r#"target="_blank""#), "{anchor}");
            assert!(anchor.contains(r#"rel="noopener noreferrer""#), "{anchor}");
        }
    }

    #[test]
    fn test_missing_surface_is_invalid_reference() {
        let tab = descriptor("AWS EventBridge");
        let panel: InfoPanel<'_, MemorySurface> = InfoPanel::new(&tab, None);

        let err = panel.render().unwrap_err();

        assert_eq!(err, InvalidReferenceError("display surface"));
        assert_eq!(
            err.to_string(),
            "InvalidReferenceError: display surface is not set"
        );
    }

    #[test]
    fn test_missing_surface_leaves_other_surfaces_untouched() {
        let tab = descriptor("AWS EventBridge");
        let bystander = MemorySurface::with_content("host content");

        let panel: InfoPanel<'_, MemorySurface> = InfoPanel::new(&tab, None);
        assert!(panel.render().is_err());

        assert_eq!(bystander.content(), "host content");
    }

    #[test]
    fn test_descriptor_is_not_mutated() {
        let tab = descriptor("AWS EventBridge");
        let surface = MemorySurface::new();

        let panel = InfoPanel::new(&tab, Some(&surface));
        panel.render().unwrap();

        assert_eq!(panel.descriptor(), &descriptor("AWS EventBridge"));
    }

    #[test]
    fn test_works_through_trait_object() {
        let tab = descriptor("AWS EventBridge");
        let surface = MemorySurface::new();
        let dyn_surface: &dyn DisplaySurface = &surface;

        let panel: Box<dyn Panel + '_> = Box::new(InfoPanel::new(&tab, Some(dyn_surface)));
        panel.render().unwrap();

        assert!(surface.content().contains("<h3>Amazon EventBridge Integration</h3>"));
    }
}
