//! Widget Configuration
//!
//! Every selector the widget looks up and every string it shows. Defaults
//! match the stock page markup; a host can override any subset through JSON.

use serde::{Deserialize, Serialize};

/// Placeholder replaced by an item's title in modal templates
pub const TITLE_PLACEHOLDER: &str = "{title}";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub selectors: Selectors,
    pub labels: Labels,
}

/// Ids, classes and scoped selectors.
///
/// `*_id` and `*_class` values are bare names; the rest are CSS selectors
/// evaluated inside their modal container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub input_id: String,
    pub add_button_id: String,
    pub list_id: String,

    pub item_class: String,
    pub title_class: String,
    pub delete_class: String,
    pub edit_class: String,

    pub delete_modal_id: String,
    pub delete_modal_title: String,
    pub delete_modal_body: String,
    pub delete_confirm: String,
    pub delete_cancel: String,

    pub edit_modal_id: String,
    pub edit_modal_title: String,
    pub edit_input: String,
    pub edit_save: String,
    pub edit_cancel: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            input_id: "todo-input".to_string(),
            add_button_id: "add-button".to_string(),
            list_id: "todo-list".to_string(),

            item_class: "todo-item".to_string(),
            title_class: "title".to_string(),
            delete_class: "delete-btn".to_string(),
            edit_class: "edit".to_string(),

            delete_modal_id: "modal-container".to_string(),
            delete_modal_title: "#modal-header h2".to_string(),
            delete_modal_body: "#modal-body p".to_string(),
            delete_confirm: "#modal-footer button#delete-btn".to_string(),
            delete_cancel: "#modal-footer button#cancel-btn".to_string(),

            edit_modal_id: "edit-modal-container".to_string(),
            edit_modal_title: "div#edit-modal-header h2".to_string(),
            edit_input: "input#edit-input".to_string(),
            edit_save: "button#edit-btn".to_string(),
            edit_cancel: "button#cancel-edit-btn".to_string(),
        }
    }
}

/// User-facing text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Labels {
    pub delete_button: String,
    pub edit_button: String,
    pub empty_input_alert: String,
    pub delete_title: String,
    /// Template; `{title}` is replaced by the item title
    pub delete_body: String,
    /// Template; `{title}` is replaced by the item title
    pub edit_title: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            delete_button: "Delete".to_string(),
            edit_button: "Edit".to_string(),
            empty_input_alert: "To add a new item to your list, you must enter a value.".to_string(),
            delete_title: "Delete Confirmation".to_string(),
            delete_body: "Are you sure you want to delete the item {title}?".to_string(),
            edit_title: "Update {title}".to_string(),
        }
    }
}

impl Labels {
    pub fn delete_body_for(&self, title: &str) -> String {
        self.delete_body.replace(TITLE_PLACEHOLDER, title)
    }

    pub fn edit_title_for(&self, title: &str) -> String {
        self.edit_title.replace(TITLE_PLACEHOLDER, title)
    }
}

impl WidgetConfig {
    /// Parse a config document; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_markup() {
        let config = WidgetConfig::default();
        assert_eq!(config.selectors.list_id, "todo-list");
        assert_eq!(config.selectors.delete_confirm, "#modal-footer button#delete-btn");
        assert_eq!(config.labels.edit_title_for("Buy milk"), "Update Buy milk");
        assert_eq!(
            config.labels.delete_body_for("Buy milk"),
            "Are you sure you want to delete the item Buy milk?"
        );
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = WidgetConfig::from_json(
            r#"{ "labels": { "deleteButton": "Remove" }, "selectors": { "listId": "items" } }"#,
        )
        .unwrap();

        assert_eq!(config.labels.delete_button, "Remove");
        assert_eq!(config.labels.edit_button, "Edit");
        assert_eq!(config.selectors.list_id, "items");
        assert_eq!(config.selectors.input_id, "todo-input");
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(WidgetConfig::from_json("{}").unwrap(), WidgetConfig::default());
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(WidgetConfig::from_json("{ labels: ").is_err());
    }
}
