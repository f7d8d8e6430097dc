//! Widget Scenario Tests
//!
//! Drive an installed widget through simulated clicks on the in-memory page.

#[cfg(test)]
mod tests {
    use crate::{Display, Dom, DomError, FakeDocument, NodeId, TodoWidget, WidgetConfig};

    const EMPTY_ALERT: &str = "To add a new item to your list, you must enter a value.";

    fn setup() -> (FakeDocument, TodoWidget<FakeDocument>) {
        let doc = FakeDocument::todo_page();
        let widget = TodoWidget::install(doc.clone(), WidgetConfig::default())
            .expect("Failed to install widget");
        (doc, widget)
    }

    fn node(doc: &FakeDocument, selector: &str) -> NodeId {
        doc.query(selector).unwrap().expect("element should exist")
    }

    fn add(doc: &FakeDocument, text: &str) {
        doc.type_text(&node(doc, "#todo-input"), text);
        doc.click(&node(doc, "#add-button"));
    }

    fn control(doc: &FakeDocument, widget: &TodoWidget<FakeDocument>, index: usize, class: &str) -> NodeId {
        let item = widget.items()[index];
        doc.query_within(&item, &format!(".{}", class)).unwrap().unwrap()
    }

    #[test]
    fn test_add_item() {
        let (doc, widget) = setup();

        add(&doc, "Buy milk");

        assert_eq!(widget.titles(), vec!["Buy milk"]);
        let item = widget.items()[0];
        let children = doc.children(&item);
        assert_eq!(children.len(), 3);
        assert_eq!(doc.text(&children[1]), "Delete");
        assert_eq!(doc.text(&children[2]), "Edit");
        assert!(doc.has_class(&children[1], "delete-btn"));
        assert!(doc.has_class(&children[2], "edit"));
        assert!(doc.alerts().is_empty());
    }

    #[test]
    fn test_add_keeps_raw_value_and_order() {
        let (doc, widget) = setup();

        add(&doc, "  padded  ");
        add(&doc, "second");
        add(&doc, "second");

        assert_eq!(widget.titles(), vec!["  padded  ", "second", "second"]);
        // The input is left as typed
        assert_eq!(doc.value(widget.input()), "second");
    }

    #[test]
    fn test_add_blank_is_rejected() {
        let (doc, widget) = setup();

        add(&doc, "");
        add(&doc, "   \t");

        assert!(widget.items().is_empty());
        assert_eq!(doc.alerts(), vec![EMPTY_ALERT, EMPTY_ALERT]);
    }

    #[test]
    fn test_markup_is_stored_as_text() {
        let (doc, widget) = setup();

        add(&doc, "<b>bold</b>");

        let title = doc.query_within(&widget.items()[0], ".title").unwrap().unwrap();
        assert_eq!(doc.text(&title), "<b>bold</b>");
        assert!(doc.children(&title).is_empty());
    }

    #[test]
    fn test_delete_confirm_removes_only_target() {
        let (doc, widget) = setup();
        add(&doc, "a");
        add(&doc, "b");
        add(&doc, "c");

        doc.click(&control(&doc, &widget, 1, "delete-btn"));
        assert_eq!(widget.delete_modal().state(), Display::Visible);
        assert_eq!(
            doc.text(&node(&doc, "#modal-body p")),
            "Are you sure you want to delete the item b?"
        );

        doc.click(&node(&doc, "#delete-btn"));
        assert_eq!(widget.titles(), vec!["a", "c"]);
        assert_eq!(widget.delete_modal().state(), Display::Hidden);
    }

    #[test]
    fn test_delete_cancel_keeps_list() {
        let (doc, widget) = setup();
        add(&doc, "a");

        doc.click(&control(&doc, &widget, 0, "delete-btn"));
        doc.click(&node(&doc, "#cancel-btn"));

        assert_eq!(widget.titles(), vec!["a"]);
        assert_eq!(widget.delete_modal().state(), Display::Hidden);
        assert!(!doc.is_visible(&node(&doc, "#modal-container")));
    }

    #[test]
    fn test_reopening_delete_targets_last_item_only() {
        let (doc, widget) = setup();
        add(&doc, "a");
        add(&doc, "b");

        // Open for "a", cancel, then open for "b" and confirm
        doc.click(&control(&doc, &widget, 0, "delete-btn"));
        doc.click(&node(&doc, "#cancel-btn"));
        doc.click(&control(&doc, &widget, 1, "delete-btn"));
        doc.click(&node(&doc, "#delete-btn"));

        assert_eq!(widget.titles(), vec!["a"]);
        assert_eq!(doc.listener_count(&node(&doc, "#delete-btn")), 1);
    }

    #[test]
    fn test_edit_save_renames_only_target() {
        let (doc, widget) = setup();
        add(&doc, "a");
        add(&doc, "b");

        doc.click(&control(&doc, &widget, 1, "edit"));
        assert_eq!(widget.edit_modal().state(), Display::Visible);
        assert_eq!(doc.text(&node(&doc, "#edit-modal-header h2")), "Update b");

        let input = node(&doc, "#edit-input");
        doc.type_text(&input, " B ");
        doc.click(&node(&doc, "#edit-btn"));

        assert_eq!(widget.titles(), vec!["a", " B "]);
        assert_eq!(doc.value(&input), "");
        assert_eq!(widget.edit_modal().state(), Display::Hidden);
    }

    #[test]
    fn test_edit_blank_save_changes_nothing() {
        let (doc, widget) = setup();
        add(&doc, "a");

        doc.click(&control(&doc, &widget, 0, "edit"));
        doc.type_text(&node(&doc, "#edit-input"), "   ");
        doc.click(&node(&doc, "#edit-btn"));

        assert_eq!(widget.titles(), vec!["a"]);
        assert_eq!(widget.edit_modal().state(), Display::Visible);
        assert!(doc.alerts().is_empty());
    }

    #[test]
    fn test_edit_cancel_keeps_title() {
        let (doc, widget) = setup();
        add(&doc, "a");

        doc.click(&control(&doc, &widget, 0, "edit"));
        doc.type_text(&node(&doc, "#edit-input"), "z");
        doc.click(&node(&doc, "#cancel-edit-btn"));

        assert_eq!(widget.titles(), vec!["a"]);
        assert_eq!(widget.edit_modal().state(), Display::Hidden);
    }

    #[test]
    fn test_clicks_elsewhere_in_list_are_ignored() {
        let (doc, widget) = setup();
        add(&doc, "a");

        doc.click(&widget.items()[0]);
        doc.click(widget.list());

        assert_eq!(widget.delete_modal().state(), Display::Hidden);
        assert_eq!(widget.edit_modal().state(), Display::Hidden);
    }

    #[test]
    fn test_install_without_markup_names_missing_id() {
        let doc = FakeDocument::new();
        doc.element(&doc.body(), "input", Some("todo-input"), &[]);

        match TodoWidget::install(doc, WidgetConfig::default()) {
            Ok(_) => panic!("install should fail"),
            Err(err) => assert_eq!(err, DomError::MissingId("add-button".to_string())),
        }
    }

    #[test]
    fn test_custom_labels() {
        let doc = FakeDocument::todo_page();
        let config = WidgetConfig::from_json(
            r#"{ "labels": { "deleteButton": "Remove", "editTitle": "Rename {title}" } }"#,
        )
        .unwrap();
        let widget = TodoWidget::install(doc.clone(), config).unwrap();

        add(&doc, "x");
        doc.click(&control(&doc, &widget, 0, "edit"));

        let children = doc.children(&widget.items()[0]);
        assert_eq!(doc.text(&children[1]), "Remove");
        assert_eq!(doc.text(&node(&doc, "#edit-modal-header h2")), "Rename x");
    }

    #[test]
    fn test_end_to_end() {
        let (doc, widget) = setup();

        add(&doc, "Buy milk");
        assert_eq!(widget.titles(), vec!["Buy milk"]);

        doc.click(&control(&doc, &widget, 0, "edit"));
        assert_eq!(doc.text(&node(&doc, "#edit-modal-header h2")), "Update Buy milk");
        doc.type_text(&node(&doc, "#edit-input"), "Buy oat milk");
        doc.click(&node(&doc, "#edit-btn"));
        assert_eq!(widget.titles(), vec!["Buy oat milk"]);

        doc.click(&control(&doc, &widget, 0, "delete-btn"));
        assert_eq!(
            doc.text(&node(&doc, "#modal-body p")),
            "Are you sure you want to delete the item Buy oat milk?"
        );
        doc.click(&node(&doc, "#delete-btn"));

        assert!(widget.items().is_empty());
        assert_eq!(widget.delete_modal().state(), Display::Hidden);
    }
}
