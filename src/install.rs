//! Widget Installation
//!
//! Binds the widget to the browser document, reading an optional JSON
//! config from `<script type="application/json" id="todo-config">`.

use todo_dom::{Dom, DomResult, TodoWidget, WebDom, WidgetConfig};

const CONFIG_ID: &str = "todo-config";

pub fn install_widget() -> DomResult<TodoWidget<WebDom>> {
    let dom = WebDom::from_window()?;
    let config = load_config(&dom)?;
    TodoWidget::install(dom, config)
}

/// Config from the page, or defaults when absent or unparsable
fn load_config<D: Dom>(dom: &D) -> DomResult<WidgetConfig> {
    let Some(script) = dom.query(&format!("#{}", CONFIG_ID))? else {
        return Ok(WidgetConfig::default());
    };
    match WidgetConfig::from_json(&dom.text(&script)) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("[APP] ignoring invalid #{}: {}", CONFIG_ID, err);
            Ok(WidgetConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_dom::FakeDocument;

    fn page_with_config(json: &str) -> FakeDocument {
        let doc = FakeDocument::todo_page();
        let script = doc.element(&doc.body(), "script", Some(CONFIG_ID), &[]);
        doc.set_text(&script, json);
        doc
    }

    #[test]
    fn test_no_config_element_uses_defaults() {
        let doc = FakeDocument::todo_page();
        assert_eq!(load_config(&doc).unwrap(), WidgetConfig::default());
    }

    #[test]
    fn test_config_element_overrides() {
        let doc = page_with_config(r#"{ "labels": { "editButton": "Rename" } }"#);
        let config = load_config(&doc).unwrap();
        assert_eq!(config.labels.edit_button, "Rename");
        assert_eq!(config.labels.delete_button, "Delete");
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let doc = page_with_config("not json");
        assert_eq!(load_config(&doc).unwrap(), WidgetConfig::default());
    }

    #[test]
    fn test_configured_widget_installs_on_page() {
        let doc = page_with_config(r#"{ "labels": { "deleteButton": "Remove" } }"#);
        let config = load_config(&doc).unwrap();
        let widget = TodoWidget::install(doc.clone(), config).unwrap();

        let item = widget.add_item("x").unwrap();
        let delete = doc.query_within(&item, ".delete-btn").unwrap().unwrap();
        assert_eq!(doc.text(&delete), "Remove");
    }
}
