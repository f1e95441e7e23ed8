//! Фиксированная разметка вкладки.
//!
//! Текст, уровни заголовков, пункты списка и URL должны совпадать побайтно
//! с уже опубликованной версией вкладки (на них завязаны скриншотные тесты).

/// Справочник доступных топиков уведомлений Genesys Cloud
pub const AVAILABLE_TOPICS_URL: &str =
    "https://developer.genesys.cloud/notificationsalerts/notifications/available-topics";

/// Документация по интеграции Amazon EventBridge
pub const EVENT_BRIDGE_URL: &str =
    "https://developer.genesys.cloud/notificationsalerts/notifications/event-bridge";

/// Раздел той же документации про настройку на стороне Genesys Cloud
pub const EVENT_BRIDGE_CONFIGURATION_URL: &str =
    "https://developer.genesys.cloud/notificationsalerts/notifications/event-bridge#genesys-cloud-configuration";

/// Terraform-автоматизация развёртывания
pub const TERRAFORM_AUTOMATION_URL: &str =
    "https://github.com/PierrickLozach/GenesysCloud-Audit-Events-To-Splunk";

/// Получатели событий EventBridge, в порядке отображения
pub const DELIVERY_TARGETS: [&str; 4] = ["Lambda", "Kinesis", "SQS", "SNS"];

/// Атрибуты внешних ссылок: новое окно, без referrer и без `window.opener`
pub const EXTERNAL_LINK_ATTRS: &str = r#"target="_blank" rel="noopener noreferrer""#;

/// Собирает разметку вкладки с заголовком `title`.
pub fn render_markup(title: &str) -> String {
    format!(
        r##"
            <h2 style="margin-top: 20px">{title}</h2>
            You can ingest more data by leveraging the Genesys Cloud WebSockets notifications via AWS EventBridge integration.

            <h3>Amazon EventBridge Integration</h3>
            <div>
                Use the Amazon EventBridge integration to store and deliver real-time data from a wide variety of Genesys Cloud events (see <a href="{topics}" {attrs}>Available topics</a>).
                This integration publishes notifications to a partner event source in your own AWS account, where they are then forwarded to your preferred processing mechanism, including:
                <ul>
                    <li>{lambda}</li>
                    <li>{kinesis}</li>
                    <li>{sqs}</li>
                    <li>{sns}</li>
                </ul>

                <p>
                    <a href="{event_bridge}" {attrs}>More information</a>
                </p>
            </div>
            <h3>Genesys Cloud Configuration</h3>
            <div>
                For complete information on how to install, configure, and manage an Amazon EventBridge integration, see
                <a href="{configuration}" {attrs}>About the Amazon EventBridge integration</a> in the Genesys Cloud Resource Center.

                <p><b>
                    To automate the provisioning and the configuration of your resources, check this
                    <a href="{terraform}" {attrs}>terraform automation</a>.
                </b></p>
            </div>
        "##,
        title = html_escape(title),
        topics = AVAILABLE_TOPICS_URL,
        event_bridge = EVENT_BRIDGE_URL,
        configuration = EVENT_BRIDGE_CONFIGURATION_URL,
        terraform = TERRAFORM_AUTOMATION_URL,
        attrs = EXTERNAL_LINK_ATTRS,
        lambda = DELIVERY_TARGETS[0],
        kinesis = DELIVERY_TARGETS[1],
        sqs = DELIVERY_TARGETS[2],
        sns = DELIVERY_TARGETS[3],
    )
}

/// Simple HTML escape
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_comes_first() {
        let markup = render_markup("AWS EventBridge");
        assert!(markup.starts_with(
            "\n            <h2 style=\"margin-top: 20px\">AWS EventBridge</h2>\n"
        ));
        assert!(markup.ends_with("</div>\n        "));
    }

    #[test]
    fn test_list_items_verbatim() {
        let markup = render_markup("T");
        assert!(markup.contains(
            "<ul>\n                    <li>Lambda</li>\n                    <li>Kinesis</li>\n                    <li>SQS</li>\n                    <li>SNS</li>\n                </ul>"
        ));
    }

    #[test]
    fn test_links_are_isolated() {
        let markup = render_markup("T");
        assert_eq!(markup.matches("<a href=").count(), 4);
        assert_eq!(
            markup
                .matches(r#"" target="_blank" rel="noopener noreferrer">"#)
                .count(),
            4
        );
    }

    #[test]
    fn test_title_is_escaped() {
        let markup = render_markup("<script>alert('x')</script> & co");
        assert!(markup.contains(
            "<h2 style=\"margin-top: 20px\">&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; co</h2>"
        ));
        assert!(!markup.contains("<script>"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("plain"), "plain");
        assert_eq!(html_escape(r#"a"b"#), "a&quot;b");
    }
}
