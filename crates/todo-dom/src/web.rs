//! Browser Document
//!
//! [`Dom`] on top of `web-sys`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, MouseEvent, Window};

use crate::dom::{ClickHandler, Display, Dom};
use crate::error::{DomError, DomResult};

#[derive(Clone)]
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    /// Bind to the page's global window and document
    pub fn from_window() -> DomResult<Self> {
        let window = web_sys::window().ok_or_else(|| DomError::Js("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| DomError::Js("no document".to_string()))?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Dom for WebDom {
    type Node = Element;

    fn query(&self, selector: &str) -> DomResult<Option<Element>> {
        self.document.query_selector(selector).map_err(DomError::from_js)
    }

    fn query_within(&self, root: &Element, selector: &str) -> DomResult<Option<Element>> {
        root.query_selector(selector).map_err(DomError::from_js)
    }

    fn closest(&self, node: &Element, selector: &str) -> DomResult<Option<Element>> {
        node.closest(selector).map_err(DomError::from_js)
    }

    fn create_element(&self, tag: &str) -> DomResult<Element> {
        self.document.create_element(tag).map_err(DomError::from_js)
    }

    fn add_class(&self, node: &Element, class: &str) -> DomResult<()> {
        node.class_list().add_1(class).map_err(DomError::from_js)
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn append(&self, parent: &Element, child: &Element) -> DomResult<()> {
        parent.append_child(child).map(|_| ()).map_err(DomError::from_js)
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }

    fn children(&self, node: &Element) -> Vec<Element> {
        let children = node.children();
        (0..children.length()).filter_map(|i| children.item(i)).collect()
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn value(&self, node: &Element) -> String {
        node.dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::value)
            .unwrap_or_default()
    }

    fn set_value(&self, node: &Element, value: &str) {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        }
    }

    fn set_display(&self, node: &Element, display: Display) -> DomResult<()> {
        let element = node
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| DomError::Js(format!("<{}> has no style", node.tag_name())))?;
        element
            .style()
            .set_property("display", display.as_css())
            .map_err(DomError::from_js)
    }

    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            log::error!("[DOM] alert failed: {:?}", err);
        }
    }

    fn on_click(&self, node: &Element, mut handler: ClickHandler<Element>) -> DomResult<()> {
        let listener = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            if let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) {
                handler(target);
            }
        });
        node.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .map_err(DomError::from_js)?;
        // Listeners live as long as the page
        listener.forget();
        Ok(())
    }
}
