//! To-Do Widget
//!
//! Add, delete and edit flows wired to the host page. Items live only in the
//! DOM; the widget keeps handles to the list and the two modals, nothing else.

use std::rc::Rc;

use crate::config::WidgetConfig;
use crate::dom::Dom;
use crate::error::DomResult;
use crate::modal::{DeleteModal, EditModal, Outcome};
use crate::selectors::{by_id, create, within};

struct Inner<D: Dom> {
    dom: D,
    config: WidgetConfig,
    input: D::Node,
    list: D::Node,
    delete_modal: DeleteModal<D>,
    edit_modal: EditModal<D>,
}

/// Installed widget; clones share the same page
pub struct TodoWidget<D: Dom> {
    inner: Rc<Inner<D>>,
}

impl<D: Dom> Clone for TodoWidget<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<D: Dom> TodoWidget<D> {
    /// Look up the page elements, bind both modals and register the add
    /// button and list listeners. Fails if any expected element is missing.
    pub fn install(dom: D, config: WidgetConfig) -> DomResult<Self> {
        let selectors = &config.selectors;
        let input = by_id(&dom, &selectors.input_id)?;
        let add_button = by_id(&dom, &selectors.add_button_id)?;
        let list = by_id(&dom, &selectors.list_id)?;
        let delete_modal = DeleteModal::bind(&dom, selectors)?;
        let edit_modal = EditModal::bind(&dom, selectors)?;

        let widget = Self {
            inner: Rc::new(Inner {
                dom: dom.clone(),
                config,
                input,
                list,
                delete_modal,
                edit_modal,
            }),
        };

        let this = widget.clone();
        dom.on_click(
            &add_button,
            Box::new(move |_: D::Node| {
                if let Err(err) = this.add_from_input() {
                    log::error!("[TODO] add failed: {}", err);
                }
            }),
        )?;

        // One delegated listener serves every current and future item
        let this = widget.clone();
        dom.on_click(
            &widget.inner.list,
            Box::new(move |target: D::Node| this.on_list_click(&target)),
        )?;

        log::info!("[TODO] widget installed");
        Ok(widget)
    }

    /// Add flow: append an item titled with the input's raw value.
    ///
    /// A blank value raises the alert and returns `None`.
    pub fn add_from_input(&self) -> DomResult<Option<D::Node>> {
        let Inner { dom, config, input, .. } = &*self.inner;
        let value = dom.value(input);
        if value.trim().is_empty() {
            log::debug!("[TODO] refusing to add an empty item");
            dom.alert(&config.labels.empty_input_alert);
            return Ok(None);
        }
        self.add_item(&value).map(Some)
    }

    /// Append an item with the given title at the end of the list
    pub fn add_item(&self, title: &str) -> DomResult<D::Node> {
        let item = self.build_item(title)?;
        self.inner.dom.append(&self.inner.list, &item)?;
        log::debug!("[TODO] added item {:?}", title);
        Ok(item)
    }

    /// `div.todo-item` > `span.title`, `button.delete-btn`, `button.edit`
    fn build_item(&self, title: &str) -> DomResult<D::Node> {
        let Inner { dom, config, .. } = &*self.inner;
        let selectors = &config.selectors;
        let labels = &config.labels;

        let item = create(dom, "div")?;
        dom.add_class(&item, &selectors.item_class)?;

        let title_node = create(dom, "span")?;
        dom.add_class(&title_node, &selectors.title_class)?;
        dom.set_text(&title_node, title);

        let delete_button = create(dom, "button")?;
        dom.add_class(&delete_button, &selectors.delete_class)?;
        dom.set_text(&delete_button, &labels.delete_button);

        let edit_button = create(dom, "button")?;
        dom.add_class(&edit_button, &selectors.edit_class)?;
        dom.set_text(&edit_button, &labels.edit_button);

        for child in [&title_node, &delete_button, &edit_button] {
            dom.append(&item, child)?;
        }
        Ok(item)
    }

    fn on_list_click(&self, target: &D::Node) {
        let selectors = &self.inner.config.selectors;
        let dom = &self.inner.dom;

        if dom.has_class(target, &selectors.delete_class) {
            if let Err(err) = self.request_delete(target) {
                log::error!("[TODO] delete failed: {}", err);
            }
        }
        if dom.has_class(target, &selectors.edit_class) {
            if let Err(err) = self.request_edit(target) {
                log::error!("[TODO] edit failed: {}", err);
            }
        }
    }

    /// Delete flow: ask for confirmation, then remove the item owning `control`
    pub fn request_delete(&self, control: &D::Node) -> DomResult<()> {
        let Some(item) = self.item_of(control)? else {
            log::warn!("[TODO] delete control is not inside an item");
            return Ok(());
        };
        let title = self.inner.dom.text(&self.title_node(&item)?);
        let labels = &self.inner.config.labels;

        let dom = self.inner.dom.clone();
        self.inner.delete_modal.show(
            &labels.delete_title,
            &labels.delete_body_for(&title),
            move || {
                dom.remove(&item);
                log::debug!("[TODO] item deleted");
                Ok(())
            },
            || log::debug!("[TODO] delete cancelled"),
        )
    }

    /// Edit flow: open the edit modal and retitle the item owning `control`
    /// when a non-blank value is saved
    pub fn request_edit(&self, control: &D::Node) -> DomResult<()> {
        let Some(item) = self.item_of(control)? else {
            log::warn!("[TODO] edit control is not inside an item");
            return Ok(());
        };
        let title_node = self.title_node(&item)?;
        let title = self.inner.dom.text(&title_node);

        let dom = self.inner.dom.clone();
        self.inner.edit_modal.show(
            &self.inner.config.labels.edit_title_for(&title),
            move |value: &str| {
                if value.trim().is_empty() {
                    return Ok(Outcome::KeepOpen);
                }
                dom.set_text(&title_node, value);
                log::debug!("[TODO] item renamed to {:?}", value);
                Ok(Outcome::Close)
            },
            || log::debug!("[TODO] edit cancelled"),
        )
    }

    fn item_of(&self, control: &D::Node) -> DomResult<Option<D::Node>> {
        let selector = format!(".{}", self.inner.config.selectors.item_class);
        self.inner.dom.closest(control, &selector)
    }

    fn title_node(&self, item: &D::Node) -> DomResult<D::Node> {
        let selector = format!(".{}", self.inner.config.selectors.title_class);
        within(&self.inner.dom, item, &selector)
    }

    /// Item nodes currently in the list, in display order
    pub fn items(&self) -> Vec<D::Node> {
        let Inner { dom, config, list, .. } = &*self.inner;
        dom.children(list)
            .into_iter()
            .filter(|node| dom.has_class(node, &config.selectors.item_class))
            .collect()
    }

    /// Visible titles, in display order
    pub fn titles(&self) -> Vec<String> {
        self.items()
            .iter()
            .filter_map(|item| self.title_node(item).ok())
            .map(|title| self.inner.dom.text(&title))
            .collect()
    }

    pub fn input(&self) -> &D::Node {
        &self.inner.input
    }

    pub fn list(&self) -> &D::Node {
        &self.inner.list
    }

    pub fn delete_modal(&self) -> &DeleteModal<D> {
        &self.inner.delete_modal
    }

    pub fn edit_modal(&self) -> &EditModal<D> {
        &self.inner.edit_modal
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.inner.config
    }
}
