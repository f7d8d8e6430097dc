//! Selector Helpers
//!
//! Lookups that fail loudly when the page does not contain what the widget
//! expects, plus the element factory.

use crate::dom::Dom;
use crate::error::{DomError, DomResult};

/// First element carrying `class`
pub fn by_class<D: Dom>(dom: &D, class: &str) -> DomResult<D::Node> {
    dom.query(&format!(".{}", class))?
        .ok_or_else(|| DomError::MissingClass(class.to_string()))
}

/// Element with the given id
pub fn by_id<D: Dom>(dom: &D, id: &str) -> DomResult<D::Node> {
    dom.query(&format!("#{}", id))?
        .ok_or_else(|| DomError::MissingId(id.to_string()))
}

/// First descendant of `root` matching `selector`
pub fn within<D: Dom>(dom: &D, root: &D::Node, selector: &str) -> DomResult<D::Node> {
    dom.query_within(root, selector)?
        .ok_or_else(|| DomError::MissingSelector(selector.to_string()))
}

/// Create a detached element named `name`
pub fn create<D: Dom>(dom: &D, name: &str) -> DomResult<D::Node> {
    if name.is_empty() {
        return Err(DomError::InvalidElementName);
    }
    dom.create_element(name)
}
